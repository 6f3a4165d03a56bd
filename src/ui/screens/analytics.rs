use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;

use super::{panel, render_card};
use crate::analytics::peak_week;
use crate::export::DEFAULT_EXPORT_FILE;
use crate::models::format_amount;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_percent;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Summary cards
            Constraint::Min(8),    // Category trends + weekly
            Constraint::Length(3), // Export hint
        ])
        .split(area);

    render_summary(f, chunks[0], app);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);
    render_category_trends(f, middle[0], app);
    render_weekly(f, middle[1], app);

    let hint = Paragraph::new(Line::from(Span::styled(
        format!(" :export writes the monthly table to {DEFAULT_EXPORT_FILE} (or a path you give)"),
        theme::dim_style(),
    )))
    .block(panel("Export"));
    f.render_widget(hint, chunks[2]);
}

fn render_summary(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let t = &app.trend;
    let months = format!("{} months", app.monthly_trend.len());
    render_card(
        f,
        cards[0],
        "Total Income",
        format_amount(t.total_income),
        theme::GREEN,
        format!("growth {}", format_percent(t.income_growth_percent)),
    );
    render_card(
        f,
        cards[1],
        "Total Expenses",
        format_amount(t.total_expenses),
        theme::RED,
        months.clone(),
    );
    render_card(
        f,
        cards[2],
        "Avg Monthly Savings",
        format_amount(t.avg_monthly_savings),
        theme::ACCENT,
        months,
    );
    render_card(
        f,
        cards[3],
        "Avg Savings Rate",
        format_percent(t.avg_savings_rate_percent),
        theme::MAUVE,
        "of income".to_string(),
    );
}

fn render_category_trends(f: &mut Frame, area: Rect, app: &App) {
    let mut header = vec!["Category".to_string()];
    header.extend(app.monthly_trend.iter().map(|m| m.month.clone()));

    let rows: Vec<Row> = app
        .category_trends
        .iter()
        .map(|trend| {
            let mut cells = vec![trend.category.clone()];
            cells.extend(trend.monthly.iter().map(|v| format_amount(*v)));
            Row::new(cells).style(theme::normal_style())
        })
        .collect();

    let mut widths = vec![Constraint::Length(11)];
    widths.extend(app.monthly_trend.iter().map(|_| Constraint::Length(11)));

    let table = Table::new(rows, widths)
        .header(Row::new(header).style(theme::header_style()))
        .block(panel("Category Trends"));
    f.render_widget(table, area);
}

fn render_weekly(f: &mut Frame, area: Rect, app: &App) {
    let peak = peak_week(&app.weekly_spending).map(|w| w.week.clone());

    let bars: Vec<Bar> = app
        .weekly_spending
        .iter()
        .map(|w| {
            let color = if peak.as_deref() == Some(w.week.as_str()) {
                theme::RED
            } else {
                theme::YELLOW
            };
            Bar::default()
                .value(w.amount.to_u64().unwrap_or(0))
                .text_value(format_amount(w.amount))
                .label(Line::from(w.week.clone()))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let title = match &peak {
        Some(week) => format!("Weekly Spending (peak: {week})"),
        None => "Weekly Spending".to_string(),
    };
    let chart = BarChart::default()
        .block(panel(&title))
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(2);
    f.render_widget(chart, area);
}
