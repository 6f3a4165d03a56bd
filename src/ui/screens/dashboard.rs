use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, List, ListItem, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::{panel, render_card};
use crate::analytics::ledger_totals;
use crate::models::{format_amount, CategoryInfo};
use crate::sample::CURRENT_MONTH_LABEL;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_percent, hex_color, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Metric cards
            Constraint::Min(10),   // Breakdown + trend
            Constraint::Length(8), // Recorded transactions
        ])
        .split(area);

    render_metric_cards(f, chunks[0], app);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);
    render_expense_breakdown(f, middle[0], app);
    render_monthly_trend(f, middle[1], app);

    render_recent(f, chunks[2], app);
}

fn render_metric_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let m = &app.metrics;
    render_card(
        f,
        cards[0],
        "Total Income",
        format_amount(m.total_income),
        theme::GREEN,
        CURRENT_MONTH_LABEL.to_string(),
    );
    render_card(
        f,
        cards[1],
        "Total Expenses",
        format_amount(m.total_expenses),
        theme::RED,
        format!("{} categories", app.expense_breakdown.len()),
    );
    render_card(
        f,
        cards[2],
        "Total Savings",
        format_amount(m.total_savings),
        if m.total_savings >= Decimal::ZERO {
            theme::ACCENT
        } else {
            theme::RED
        },
        "income - expenses".to_string(),
    );
    render_card(
        f,
        cards[3],
        "Savings Rate",
        format_percent(m.savings_rate_percent),
        theme::MAUVE,
        "of income".to_string(),
    );
}

fn render_expense_breakdown(f: &mut Frame, area: Rect, app: &App) {
    let total: Decimal = app.expense_breakdown.iter().map(|s| s.value).sum();

    let items: Vec<ListItem> = app
        .expense_breakdown
        .iter()
        .map(|slice| {
            let swatch = hex_color(&slice.color).unwrap_or(theme::TEXT_DIM);
            let share = if total.is_zero() {
                Decimal::ZERO
            } else {
                (slice.value * Decimal::ONE_HUNDRED / total).round_dp(1)
            };
            ListItem::new(Line::from(vec![
                Span::styled(" ● ", Style::default().fg(swatch)),
                Span::styled(
                    format!("{:<18}", truncate(&slice.name, 17)),
                    theme::normal_style(),
                ),
                Span::styled(format!("{:>12}", format_amount(slice.value)), theme::expense_style()),
                Span::styled(format!(" {share:>5}%"), theme::dim_style()),
            ]))
        })
        .collect();

    let list = List::new(items).block(panel("Expense Breakdown"));
    f.render_widget(list, area);
}

fn render_monthly_trend(f: &mut Frame, area: Rect, app: &App) {
    let to_bar = |value: Decimal, color: Color| {
        // Scaled to thousands so bar labels stay short.
        let k = (value / Decimal::ONE_THOUSAND).to_u64().unwrap_or(0);
        Bar::default()
            .value(k)
            .text_value(format!("{k}k"))
            .style(Style::default().fg(color))
            .value_style(Style::default().fg(theme::HEADER_BG).bg(color))
    };

    let mut chart = BarChart::default()
        .block(panel("Monthly Trend (income / expenses / savings)"))
        .bar_width(3)
        .bar_gap(0)
        .group_gap(2);

    for month in &app.monthly_trend {
        let bars = [
            to_bar(month.income, theme::GREEN),
            to_bar(month.expenses, theme::RED),
            to_bar(month.savings, theme::ACCENT),
        ];
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(month.month.clone()))
                .bars(&bars),
        );
    }

    f.render_widget(chart, area);
}

fn render_recent(f: &mut Frame, area: Rect, app: &App) {
    let (income, expenses) = ledger_totals(&app.transactions);
    let title = format!(
        "Recorded Transactions ({}) | in {} | out {}",
        app.transactions.len(),
        format_amount(income),
        format_amount(expenses)
    );

    if app.transactions.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No transactions recorded yet. Press 2 to add one",
            theme::dim_style(),
        )))
        .centered()
        .block(panel(&title));
        f.render_widget(msg, area);
        return;
    }

    let items: Vec<ListItem> = app
        .transactions
        .iter()
        .take(area.height.saturating_sub(2) as usize)
        .map(|t| {
            let amount_style = if t.is_income() {
                theme::income_style()
            } else {
                theme::expense_style()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", t.date.format("%Y-%m-%d")), theme::dim_style()),
                Span::styled(
                    format!("{:<28}", truncate(&t.description, 27)),
                    theme::normal_style(),
                ),
                Span::styled(
                    format!("{:<18}", truncate(&CategoryInfo::label_for(&t.category), 17)),
                    theme::dim_style(),
                ),
                Span::styled(
                    format!("{:>14}", format_amount(t.signed_amount())),
                    amount_style.add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(panel(&title));
    f.render_widget(list, area);
}
