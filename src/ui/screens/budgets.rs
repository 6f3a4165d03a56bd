use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::{insight_lines, panel};
use crate::insights::budget_insights;
use crate::models::format_amount;
use crate::tracker::classify;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_percent, hex_color, progress_bar, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(area);

    render_overall(f, chunks[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[1]);
    render_goals(f, body[0], app);

    let insights = Paragraph::new(insight_lines(&budget_insights(app.tracker.goals())))
        .wrap(Wrap { trim: false })
        .block(panel("Insights"));
    f.render_widget(insights, body[1]);
}

fn render_overall(f: &mut Frame, area: Rect, app: &App) {
    let totals = app.tracker.totals();
    let color = theme::status_color(totals.status);
    let ratio = match totals.overall_ratio_percent {
        Some(r) => (r.to_f64().unwrap_or(0.0) / 100.0).clamp(0.0, 1.0),
        None => 1.0,
    };

    let label = format!(
        "{} of {} spent ({}) | {} {} | {}",
        format_amount(totals.total_spent),
        format_amount(totals.total_budget),
        format_percent(totals.overall_ratio_percent),
        format_amount(totals.remaining.abs()),
        if totals.remaining < Decimal::ZERO {
            "over"
        } else {
            "left"
        },
        totals.status.badge()
    );

    let gauge = Gauge::default()
        .block(panel("Overall Budget"))
        .gauge_style(Style::default().fg(color).bg(theme::SURFACE))
        .ratio(ratio)
        .label(Span::styled(
            label,
            Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
        ));
    f.render_widget(gauge, area);
}

fn render_goals(f: &mut Frame, area: Rect, app: &App) {
    let goals = app.tracker.goals();
    if goals.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No budget goals yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Use :budget <category> <amount> [period] to add one",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(panel("Budget Goals"));
        f.render_widget(msg, area);
        return;
    }

    // Two lines per goal, so scroll by goal.
    let per_page = (area.height.saturating_sub(2) as usize / 2).max(1);
    let skip = app.budget_index.saturating_sub(per_page - 1);

    let items: Vec<ListItem> = goals
        .iter()
        .enumerate()
        .skip(skip)
        .take(per_page)
        .map(|(i, goal)| {
            let c = classify(goal);
            let color = theme::status_color(c.status);
            let swatch = hex_color(&goal.color).unwrap_or(theme::TEXT_DIM);
            let name_style = if i == app.budget_index {
                theme::selected_style()
            } else {
                theme::normal_style()
            };

            let remaining = goal.remaining();
            let remaining_text = if remaining < Decimal::ZERO {
                format!("{} over", format_amount(remaining.abs()))
            } else {
                format!("{} left", format_amount(remaining))
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(" ● ", Style::default().fg(swatch)),
                    Span::styled(format!("{:<18}", truncate(&goal.category, 17)), name_style),
                    Span::styled(format!(" {:<8}", goal.period.as_str()), theme::dim_style()),
                    Span::styled(
                        format!(
                            "{} / {}",
                            format_amount(goal.current_spent),
                            format_amount(goal.budget_amount)
                        ),
                        Style::default().fg(color),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("   "),
                    Span::styled(progress_bar(c.bar_ratio(), 20), Style::default().fg(color)),
                    Span::styled(
                        format!(" {:>7}", format_percent(c.ratio_percent.map(|r| r.round_dp(1)))),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("  {:<12}", c.status.badge()), Style::default().fg(color)),
                    Span::styled(remaining_text, theme::dim_style()),
                ]),
            ])
        })
        .collect();

    let title = format!("Budget Goals ({})", goals.len());
    f.render_widget(List::new(items).block(panel(&title)), area);
}
