use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::db::Database;
use crate::ingest::FormField;
use crate::tracker::BudgetTracker;
use crate::ui::app::{App, InputMode, Screen};
use crate::ui::commands;
use crate::ui::util::{select_next, select_prev};

pub(crate) fn as_tui(db: &mut Database, tracker: BudgetTracker) -> Result<()> {
    let mut app = App::new(tracker);
    app.refresh_transactions(db)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, db);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("TUI exited with error: {e:?}");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    db: &mut Database,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| crate::ui::render::render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, db)?,
                InputMode::Command => handle_command_input(key, app, db)?,
                InputMode::Insert => handle_insert_input(key, app),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, db: &mut Database) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char(c @ '1'..='5') => {
            let idx = c as usize - '1' as usize;
            if let Some(screen) = Screen::all().get(idx) {
                switch_screen(app, db, *screen)?;
            }
        }
        KeyCode::Tab => switch_screen(app, db, app.screen.next())?,
        KeyCode::BackTab => switch_screen(app, db, app.screen.prev())?,
        _ => match app.screen {
            Screen::AddTransaction => handle_form_key(key, app, db)?,
            Screen::Budgets => handle_budget_key(key, app, db)?,
            Screen::Dashboard | Screen::Analytics | Screen::Advisor => {}
        },
    }
    Ok(())
}

fn handle_form_key(key: event::KeyEvent, app: &mut App, db: &mut Database) -> Result<()> {
    let field = app.form.focused();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.form.focus_next(),
        KeyCode::Char('k') | KeyCode::Up => app.form.focus_prev(),
        KeyCode::Char('h') | KeyCode::Left => adjust_field(app, field, -1),
        KeyCode::Char('l') | KeyCode::Right => adjust_field(app, field, 1),
        KeyCode::Char('i') | KeyCode::Enter if field.is_text() => {
            app.input_mode = InputMode::Insert;
        }
        KeyCode::Enter => app.form.focus_next(),
        KeyCode::Char('S') => commands::submit_form(app, db)?,
        KeyCode::Char('C') => {
            app.form.reset(chrono::Local::now().date_naive());
            app.set_status("Form cleared");
        }
        KeyCode::Esc => app.status_message.clear(),
        _ => {}
    }
    Ok(())
}

/// Left/Right on a choice field: type toggles, category and description cycle.
fn adjust_field(app: &mut App, field: FormField, delta: i32) {
    match field {
        FormField::Kind => {
            let kind = app.form.kind.toggle();
            app.form.set_kind(kind);
        }
        FormField::Category => app.form.cycle_category(delta),
        FormField::Description => {
            let suggestions = app.form.suggestions();
            if suggestions.is_empty() {
                return;
            }
            let len = suggestions.len() as i32;
            let next = match suggestions.iter().position(|s| *s == app.form.description) {
                Some(idx) => (idx as i32 + delta).rem_euclid(len),
                None if delta < 0 => len - 1,
                None => 0,
            };
            app.form.apply_suggestion(next as usize);
        }
        FormField::Amount | FormField::Date | FormField::Notes => {}
    }
}

fn handle_budget_key(key: event::KeyEvent, app: &mut App, db: &mut Database) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            select_next(&mut app.budget_index, app.tracker.goals().len());
        }
        KeyCode::Char('k') | KeyCode::Up => select_prev(&mut app.budget_index),
        KeyCode::Char('g') | KeyCode::Home => app.budget_index = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.budget_index = app.tracker.goals().len().saturating_sub(1);
        }
        KeyCode::Char('a') => {
            app.input_mode = InputMode::Command;
            app.command_input = "budget ".to_string();
        }
        KeyCode::Char('e') => {
            let prefill = app
                .selected_goal()
                .map(|g| format!("edit {} {} {}", g.category, g.budget_amount, g.period));
            if let Some(input) = prefill {
                app.command_input = input;
                app.input_mode = InputMode::Command;
            }
        }
        KeyCode::Char('p') => cycle_period(app, db)?,
        _ => {}
    }
    Ok(())
}

fn cycle_period(app: &mut App, db: &mut Database) -> Result<()> {
    let Some(goal) = app.selected_goal().cloned() else {
        return Ok(());
    };
    match app.tracker.update_goal(
        &goal.id,
        &goal.category,
        &goal.budget_amount.to_string(),
        goal.period.next(),
    ) {
        Ok(updated) => {
            db.save_goals(app.tracker.goals())?;
            app.set_status(format!("{} is now {}", updated.category, updated.period));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn handle_command_input(key: event::KeyEvent, app: &mut App, db: &mut Database) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, db)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let trimmed = app.command_input.trim_end();
            if let Some(pos) = trimmed.rfind(' ') {
                app.command_input.truncate(pos + 1);
            } else {
                app.command_input.clear();
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_insert_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.input_mode = InputMode::Normal,
        KeyCode::Tab => {
            app.form.focus_next();
            if !app.form.focused().is_text() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Backspace => {
            if let Some(buf) = app.form.focused_text_mut() {
                buf.pop();
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(buf) = app.form.focused_text_mut() {
                buf.clear();
            }
        }
        KeyCode::Char(c) => {
            if let Some(buf) = app.form.focused_text_mut() {
                buf.push(c);
            }
        }
        _ => {}
    }
}

fn switch_screen(app: &mut App, db: &mut Database, screen: Screen) -> Result<()> {
    app.screen = screen;
    app.status_message.clear();
    if screen == Screen::Dashboard {
        app.refresh_transactions(db)?;
    }
    Ok(())
}
