use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{insight_lines, panel};
use crate::insights::{advisor_tips, WEEKLY_TIP};
use crate::models::format_amount;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_percent;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Snapshot
            Constraint::Min(8),    // Recommendations
            Constraint::Length(5), // Weekly tip
        ])
        .split(area);

    let totals = app.tracker.totals();
    let snapshot = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(" Savings rate ", theme::dim_style()),
            Span::styled(
                format_percent(app.metrics.savings_rate_percent),
                Style::default().fg(theme::MAUVE).add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Budget used ", theme::dim_style()),
            Span::styled(
                format_percent(totals.overall_ratio_percent),
                Style::default()
                    .fg(theme::status_color(totals.status))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Avg monthly savings ", theme::dim_style()),
            Span::styled(
                format_amount(app.trend.avg_monthly_savings),
                Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            " Recommendations are rule-based on your budgets and sample history.",
            theme::dim_style(),
        )),
    ])
    .block(panel("AI Financial Advisor"));
    f.render_widget(snapshot, chunks[0]);

    let tips = Paragraph::new(insight_lines(&advisor_tips()))
        .wrap(Wrap { trim: false })
        .block(panel("Personalized Recommendations"));
    f.render_widget(tips, chunks[1]);

    let weekly = Paragraph::new(Line::from(Span::styled(
        format!(" {WEEKLY_TIP}"),
        Style::default().fg(theme::YELLOW),
    )))
    .wrap(Wrap { trim: true })
    .block(panel("Weekly Tip"));
    f.render_widget(weekly, chunks[2]);
}
