use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use super::panel;
use crate::ingest::FormField;
use crate::models::TransactionType;
use crate::ui::app::{App, InputMode};
use crate::ui::theme;
use crate::ui::util::hex_color;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_fields(f, cols[0], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(7)])
        .split(cols[1]);
    render_categories(f, right[0], app);
    render_suggestions(f, right[1], app);
}

fn render_fields(f: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;
    let focused = form.focused();
    let editing = app.input_mode == InputMode::Insert;

    let mut lines = vec![Line::from("")];
    for field in FormField::all() {
        let is_focused = *field == focused;
        let value = match field {
            FormField::Kind => match form.kind {
                TransactionType::Income => "< Income >".to_string(),
                TransactionType::Expense => "< Expense >".to_string(),
            },
            FormField::Category => form
                .selected_category()
                .map(|c| format!("< {} >", c.label))
                .unwrap_or_else(|| "< Select category >".to_string()),
            FormField::Amount => form.amount.clone(),
            FormField::Description => form.description.clone(),
            FormField::Date => form.date.clone(),
            FormField::Notes => form.notes.clone(),
        };
        let cursor = if is_focused && editing && field.is_text() {
            "▏"
        } else {
            ""
        };

        let label_style = if is_focused {
            theme::selected_style().add_modifier(Modifier::BOLD)
        } else {
            theme::dim_style()
        };
        let value_style = match field {
            FormField::Kind if form.kind == TransactionType::Income => theme::income_style(),
            FormField::Kind => theme::expense_style(),
            _ => theme::normal_style(),
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {:<18}", field.label()), label_style),
            Span::raw("  "),
            Span::styled(format!("{value}{cursor}"), value_style),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        " Fields marked * are required. Press S to save.",
        theme::dim_style(),
    )));

    let title = match form.kind {
        TransactionType::Income => "Add Income",
        TransactionType::Expense => "Add Expense",
    };
    f.render_widget(Paragraph::new(lines).block(panel(title)), area);
}

fn render_categories(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .form
        .categories()
        .into_iter()
        .map(|cat| {
            let selected = app.form.category == Some(cat.value);
            let swatch = hex_color(cat.color).unwrap_or(theme::TEXT_DIM);
            let style = if selected {
                theme::selected_style()
            } else {
                theme::normal_style()
            };
            ListItem::new(Line::from(vec![
                Span::styled(" ● ", Style::default().fg(swatch)),
                Span::styled(cat.label, style),
            ]))
        })
        .collect();

    let title = format!("Categories ({})", app.form.kind);
    f.render_widget(List::new(items).block(panel(&title)), area);
}

fn render_suggestions(f: &mut Frame, area: Rect, app: &App) {
    let suggestions = app.form.suggestions();
    let lines: Vec<Line> = if suggestions.is_empty() {
        vec![Line::from(Span::styled(
            " Pick a category to see suggestions",
            theme::dim_style(),
        ))]
    } else {
        suggestions
            .iter()
            .map(|s| {
                let style = if app.form.description == *s {
                    Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)
                } else {
                    theme::normal_style()
                };
                Line::from(Span::styled(format!(" {s}"), style))
            })
            .collect()
    };

    f.render_widget(Paragraph::new(lines).block(panel("Quick Suggestions")), area);
}
