pub(crate) mod advisor;
pub(crate) mod analytics;
pub(crate) mod budgets;
pub(crate) mod dashboard;
pub(crate) mod transaction_form;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::insights::{Insight, InsightKind, Priority};
use crate::ui::theme;

pub(crate) fn panel(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(Span::styled(format!(" {title} "), theme::title_style()))
}

/// Bordered card with a large centered figure and a dim subtitle.
pub(crate) fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    color: Color,
    subtitle: String,
) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, theme::dim_style())),
    ])
    .centered()
    .block(panel(title));

    f.render_widget(text, area);
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => theme::RED,
        Priority::Medium => theme::YELLOW,
        Priority::Low => theme::GREEN,
    }
}

fn kind_icon(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Alert => "!",
        InsightKind::Progress => "✓",
        InsightKind::Tip => "*",
        InsightKind::Growth => "↑",
    }
}

/// Two lines per insight: icon, title and priority, then the body.
pub(crate) fn insight_lines(insights: &[Insight]) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(insights.len() * 3);
    for insight in insights {
        let color = priority_color(insight.priority);
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", kind_icon(insight.kind)),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                insight.title.clone(),
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  [{}]", insight.priority.as_str()), Style::default().fg(color)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", insight.body),
            theme::dim_style(),
        )));
        lines.push(Line::from(""));
    }
    lines
}
