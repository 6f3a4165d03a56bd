use anyhow::{bail, Result};
use std::path::PathBuf;

use crate::analytics;
use crate::db::Database;
use crate::export;
use crate::ingest::{self, TransactionDraft};
use crate::insights::{self, Insight};
use crate::models::{format_amount, CategoryInfo, TransactionType};
use crate::sample;
use crate::tracker::{classify, BudgetTracker};
use crate::ui::commands::{parse_goal_args, period_choices};
use crate::ui::util::{format_percent, truncate};

pub(crate) fn as_cli(args: &[String], db: &mut Database, mut tracker: BudgetTracker) -> Result<()> {
    match args[1].as_str() {
        "budgets" | "b" => cli_budgets(&tracker),
        "budget" => cli_budget(&args[2..], db, &mut tracker),
        "add" => cli_add(&args[2..], db, &mut tracker),
        "transactions" | "t" => cli_transactions(db),
        "summary" | "s" => cli_summary(db, &tracker),
        "insights" | "i" => cli_insights(&tracker),
        "export" => cli_export(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("budgetai {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("BudgetAI - local budget tracker and finance dashboard");
    println!();
    println!("Usage: budgetai [command]");
    println!();
    println!("Commands:");
    println!("  (none)                                Launch interactive TUI");
    println!("  budgets                               List budget goals and their status");
    println!("  budget add <category> <amount> [period]");
    println!("                                        Add a budget goal (period: {})", period_choices());
    println!("  budget edit <id> <category> <amount> [period]");
    println!("                                        Edit a budget goal by id");
    println!("  add <income|expense> <amount> <category> <description>");
    println!("    --date <YYYY-MM-DD>                 Transaction date (default: today)");
    println!("    --notes <text>                      Optional notes");
    println!("  transactions                          List recorded transactions");
    println!("  summary                               Print the financial summary");
    println!("  insights                              Print budget insights and advisor tips");
    println!("  export [path]                         Export the monthly report to CSV");
    println!("  --help, -h                            Show this help");
    println!("  --version, -V                         Show version");
    println!();
    let names: Vec<&str> = CategoryInfo::budget_categories()
        .iter()
        .map(|c| c.label)
        .collect();
    println!("Budget categories: {}", names.join(", "));
}

fn cli_budgets(tracker: &BudgetTracker) -> Result<()> {
    let goals = tracker.goals();
    if goals.is_empty() {
        println!("No budget goals");
        return Ok(());
    }

    println!(
        "{:<36}  {:<18} {:<8} {:>12} {:>12} {:>8}  Status",
        "ID", "Category", "Period", "Spent", "Budget", "Used"
    );
    println!("{}", "─".repeat(112));
    for goal in goals {
        let c = classify(goal);
        println!(
            "{:<36}  {:<18} {:<8} {:>12} {:>12} {:>8}  {}",
            goal.id,
            truncate(&goal.category, 18),
            goal.period.as_str(),
            format_amount(goal.current_spent),
            format_amount(goal.budget_amount),
            format_percent(c.ratio_percent.map(|r| r.round_dp(1))),
            c.status.badge()
        );
    }

    let totals = tracker.totals();
    println!();
    println!(
        "Total: {} of {} spent ({}), {} remaining - {}",
        format_amount(totals.total_spent),
        format_amount(totals.total_budget),
        format_percent(totals.overall_ratio_percent),
        format_amount(totals.remaining),
        totals.status.badge()
    );
    Ok(())
}

fn cli_budget(args: &[String], db: &mut Database, tracker: &mut BudgetTracker) -> Result<()> {
    match args.first().map(String::as_str) {
        Some("add") => {
            let joined = args[1..].join(" ");
            let Some((category, amount, period)) = parse_goal_args(&joined) else {
                bail!("Usage: budgetai budget add <category> <amount> [period]");
            };
            let goal = tracker.add_goal(category, amount, period)?;
            db.save_goals(tracker.goals())?;
            println!(
                "Added {} budget for {}: {} ({})",
                goal.period,
                goal.category,
                format_amount(goal.budget_amount),
                goal.id
            );
            Ok(())
        }
        Some("edit") => {
            let Some(id) = args.get(1) else {
                bail!("Usage: budgetai budget edit <id> <category> <amount> [period]");
            };
            let joined = args[2..].join(" ");
            let Some((category, amount, period)) = parse_goal_args(&joined) else {
                bail!("Usage: budgetai budget edit <id> <category> <amount> [period]");
            };
            let previous = tracker.get(id).map(|g| g.budget_amount);
            let goal = tracker.update_goal(id, category, amount, period)?;
            db.save_goals(tracker.goals())?;
            println!(
                "Updated {}: {} -> {} {} ({} spent)",
                goal.category,
                format_amount(previous.unwrap_or_default()),
                format_amount(goal.budget_amount),
                goal.period,
                format_amount(goal.current_spent)
            );
            Ok(())
        }
        _ => bail!("Usage: budgetai budget <add|edit> ..."),
    }
}

/// Positional `<type> <amount> <category> <description...>` with optional
/// `--date` and `--notes` flags anywhere after the type.
pub(crate) fn parse_add_args(args: &[String]) -> Result<TransactionDraft> {
    let mut positional = Vec::new();
    let mut date = String::new();
    let mut notes = String::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--date" => match iter.next() {
                Some(v) => date = v.clone(),
                None => bail!("--date needs a value"),
            },
            "--notes" => match iter.next() {
                Some(v) => notes = v.clone(),
                None => bail!("--notes needs a value"),
            },
            _ => positional.push(arg.as_str()),
        }
    }

    if positional.len() < 4 {
        bail!("Usage: budgetai add <income|expense> <amount> <category> <description>");
    }
    let Some(kind) = TransactionType::parse(positional[0]) else {
        bail!("Unknown transaction type '{}', expected income or expense", positional[0]);
    };

    // Accept labels too, stored by catalog key.
    let category = CategoryInfo::find(positional[2])
        .map(|c| c.value.to_string())
        .unwrap_or_else(|| positional[2].to_string());

    Ok(TransactionDraft {
        kind,
        amount: positional[1].to_string(),
        category,
        description: positional[3..].join(" "),
        date,
        notes,
    })
}

fn cli_add(args: &[String], db: &mut Database, tracker: &mut BudgetTracker) -> Result<()> {
    let draft = parse_add_args(args)?;
    let txn = ingest::submit(db, tracker, &draft)?;
    println!(
        "Recorded {} {} in {} on {} ({})",
        txn.kind,
        format_amount(txn.amount),
        CategoryInfo::label_for(&txn.category),
        txn.date,
        txn.id
    );
    if txn.is_expense() {
        if let Some(goal) = tracker.find_by_category(&txn.category) {
            let c = classify(goal);
            println!(
                "  {}: {} of {} ({}) - {}",
                goal.category,
                format_amount(goal.current_spent),
                format_amount(goal.budget_amount),
                format_percent(c.ratio_percent.map(|r| r.round_dp(1))),
                c.status.badge()
            );
        }
    }
    Ok(())
}

fn cli_transactions(db: &mut Database) -> Result<()> {
    let txns = db.get_transactions()?;
    if txns.is_empty() {
        println!("No transactions recorded");
        return Ok(());
    }

    println!(
        "{:<10}  {:<8} {:<18} {:<30} {:>14}",
        "Date", "Type", "Category", "Description", "Amount"
    );
    println!("{}", "─".repeat(84));
    for t in &txns {
        println!(
            "{:<10}  {:<8} {:<18} {:<30} {:>14}",
            t.date.format("%Y-%m-%d"),
            t.kind.as_str(),
            truncate(&CategoryInfo::label_for(&t.category), 18),
            truncate(&t.description, 30),
            format_amount(t.signed_amount())
        );
    }

    let (income, expenses) = analytics::ledger_totals(&txns);
    println!();
    println!(
        "{} transactions | income {} | expenses {} | net {}",
        txns.len(),
        format_amount(income),
        format_amount(expenses),
        format_amount(income - expenses)
    );
    Ok(())
}

fn cli_summary(db: &mut Database, tracker: &BudgetTracker) -> Result<()> {
    let trend = sample::monthly_trend();
    let metrics = analytics::dashboard_metrics(&trend, &sample::expense_breakdown());
    let summary = analytics::trend_summary(&trend);
    let totals = tracker.totals();
    let (income, expenses) = analytics::ledger_totals(&db.get_transactions()?);

    println!("BudgetAI - {}", sample::CURRENT_MONTH_LABEL);
    println!("{}", "─".repeat(44));
    println!("  Income:         {}", format_amount(metrics.total_income));
    println!("  Expenses:       {}", format_amount(metrics.total_expenses));
    println!("  Savings:        {}", format_amount(metrics.total_savings));
    println!("  Savings rate:   {}", format_percent(metrics.savings_rate_percent));
    println!();
    println!("Last {} months:", trend.len());
    println!("  Income:         {}", format_amount(summary.total_income));
    println!("  Expenses:       {}", format_amount(summary.total_expenses));
    println!("  Avg savings:    {}", format_amount(summary.avg_monthly_savings));
    println!("  Avg rate:       {}", format_percent(summary.avg_savings_rate_percent));
    println!("  Income growth:  {}", format_percent(summary.income_growth_percent));
    println!();
    println!("Budget goals:");
    println!("  Budget:         {}", format_amount(totals.total_budget));
    println!("  Spent:          {}", format_amount(totals.total_spent));
    println!("  Remaining:      {}", format_amount(totals.remaining));
    println!(
        "  Used:           {} ({})",
        format_percent(totals.overall_ratio_percent),
        totals.status.badge()
    );
    println!();
    println!("Recorded:");
    println!("  Transactions:   {}", db.get_transaction_count()?);
    println!("  Income:         {}", format_amount(income));
    println!("  Expenses:       {}", format_amount(expenses));
    Ok(())
}

fn print_insights(title: &str, items: &[Insight]) {
    println!("{title}");
    println!("{}", "─".repeat(title.len()));
    for insight in items {
        println!("[{}] {}", insight.priority.as_str(), insight.title);
        println!("    {}", insight.body);
    }
    println!();
}

fn cli_insights(tracker: &BudgetTracker) -> Result<()> {
    print_insights("Budget insights", &insights::budget_insights(tracker.goals()));
    print_insights("Advisor tips", &insights::advisor_tips());
    println!("Weekly tip: {}", insights::WEEKLY_TIP);
    Ok(())
}

fn cli_export(args: &[String]) -> Result<()> {
    let path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| PathBuf::from(shellexpand(a)))
        .unwrap_or_else(|| PathBuf::from(export::DEFAULT_EXPORT_FILE));

    let count = export::export_monthly(&path, &sample::monthly_trend())?;
    println!("Exported {count} months to {}", path.display());
    Ok(())
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
