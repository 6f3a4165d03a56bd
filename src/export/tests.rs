#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn row(month: &str, income: Decimal, expenses: Decimal, savings: Decimal) -> MonthlySummary {
    MonthlySummary {
        month: month.into(),
        income,
        expenses,
        savings,
    }
}

#[test]
fn test_single_row_exact_format() {
    let csv = monthly_csv(&[row("Jan", dec!(65000), dec!(45000), dec!(20000))]).unwrap();
    assert_eq!(csv, "Month,Income,Expenses,Savings\nJan,65000,45000,20000");
}

#[test]
fn test_empty_table_is_header_only() {
    assert_eq!(monthly_csv(&[]).unwrap(), "Month,Income,Expenses,Savings");
}

#[test]
fn test_sample_table_has_no_quotes_or_trailing_newline() {
    let csv = monthly_csv(&crate::sample::monthly_trend()).unwrap();
    assert_eq!(csv.lines().count(), 7);
    assert!(!csv.ends_with('\n'));
    assert!(!csv.contains('"'));
    assert!(!csv.contains('\r'));
    assert_eq!(csv.lines().last(), Some("Jun,75000,51000,24000"));
}

#[test]
fn test_fields_are_never_quoted() {
    let csv = monthly_csv(&[row("Jan, 2024", dec!(1.5), dec!(0), dec!(1.5))]).unwrap();
    assert_eq!(csv, "Month,Income,Expenses,Savings\nJan, 2024,1.5,0,1.5");
}

#[test]
fn test_export_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_EXPORT_FILE);
    let rows = crate::sample::monthly_trend();
    let count = export_monthly(&path, &rows).unwrap();
    assert_eq!(count, 6);
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, monthly_csv(&rows).unwrap());
    assert!(written.starts_with("Month,Income,Expenses,Savings\nJan,65000,45000,20000\n"));
}
