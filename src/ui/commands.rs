use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::LazyLock;

use super::app::{App, InputMode, Screen};
use crate::db::Database;
use crate::errors::TrackerError;
use crate::export;
use crate::ingest;
use crate::models::{format_amount, Period};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Database) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit BudgetAI", cmd_quit, r);
    register_command!("quit", "Quit BudgetAI", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("n", "Go to Add Transaction", cmd_new_transaction, r);
    register_command!("new", "Go to Add Transaction", cmd_new_transaction, r);
    register_command!("an", "Go to Analytics", cmd_analytics, r);
    register_command!("analytics", "Go to Analytics", cmd_analytics, r);
    register_command!("b", "Go to Budget Goals", cmd_budgets, r);
    register_command!("budgets", "Go to Budget Goals", cmd_budgets, r);
    register_command!("ai", "Go to AI Advisor", cmd_advisor, r);
    register_command!("advisor", "Go to AI Advisor", cmd_advisor, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "budget",
        "Add budget goal (e.g. :budget Travel 5000 monthly)",
        cmd_budget,
        r
    );
    register_command!(
        "edit",
        "Edit selected goal (e.g. :edit Food & Dining 9000 monthly)",
        cmd_edit,
        r
    );
    register_command!("submit", "Save the transaction form", cmd_submit, r);
    register_command!("clear", "Reset the transaction form", cmd_clear, r);
    register_command!(
        "export",
        "Export monthly report to CSV (e.g. :export ~/report.csv)",
        cmd_export,
        r
    );

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, db)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 2) // skip short aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

pub(crate) fn period_choices() -> String {
    Period::all()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join("|")
}

/// Split `<category words...> <amount> [period]`. A missing period means monthly.
pub(crate) fn parse_goal_args(args: &str) -> Option<(&str, &str, Period)> {
    let args = args.trim();
    let (rest, period) = match args.rsplit_once(' ') {
        Some((head, tail)) => match Period::parse(tail) {
            Some(p) => (head.trim_end(), p),
            None => (args, Period::Monthly),
        },
        None => (args, Period::Monthly),
    };
    let (category, amount) = rest.rsplit_once(' ')?;
    let category = category.trim();
    if category.is_empty() {
        return None;
    }
    Some((category, amount, period))
}

/// Validate and store the transaction form. Validation problems become the
/// status message and leave the form as typed.
pub(crate) fn submit_form(app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    let draft = app.form.to_draft();
    match ingest::submit(db, &mut app.tracker, &draft) {
        Ok(txn) => {
            app.form.reset(chrono::Local::now().date_naive());
            app.refresh_transactions(db)?;
            app.input_mode = InputMode::Normal;
            app.set_status(format!(
                "Transaction added successfully! {} {} ({})",
                txn.kind,
                format_amount(txn.amount),
                txn.description
            ));
            Ok(())
        }
        Err(e) => match e.downcast_ref::<TrackerError>() {
            Some(err) => {
                app.set_status(err.to_string());
                Ok(())
            }
            None => Err(e),
        },
    }
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    app.refresh_transactions(db)?;
    Ok(())
}

fn cmd_new_transaction(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.screen = Screen::AddTransaction;
    Ok(())
}

fn cmd_analytics(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.screen = Screen::Analytics;
    Ok(())
}

fn cmd_budgets(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.screen = Screen::Budgets;
    Ok(())
}

fn cmd_advisor(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.screen = Screen::Advisor;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_budget(args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    let Some((category, amount, period)) = parse_goal_args(args) else {
        app.set_status(format!(
            "Usage: :budget <category> <amount> [{}]",
            period_choices()
        ));
        return Ok(());
    };

    match app.tracker.add_goal(category, amount, period) {
        Ok(goal) => {
            db.save_goals(app.tracker.goals())?;
            app.budget_index = app.tracker.goals().len().saturating_sub(1);
            app.screen = Screen::Budgets;
            app.set_status(format!(
                "Budget goal added: {} {} {}",
                goal.category,
                format_amount(goal.budget_amount),
                goal.period
            ));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_edit(args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    let Some(id) = app.selected_goal().map(|g| g.id.clone()) else {
        app.set_status("No budget goal selected");
        return Ok(());
    };
    let Some((category, amount, period)) = parse_goal_args(args) else {
        app.set_status(format!(
            "Usage: :edit <category> <amount> [{}]",
            period_choices()
        ));
        return Ok(());
    };

    match app.tracker.update_goal(&id, category, amount, period) {
        Ok(goal) => {
            db.save_goals(app.tracker.goals())?;
            app.screen = Screen::Budgets;
            app.set_status(format!(
                "Budget goal updated: {} {} {}",
                goal.category,
                format_amount(goal.budget_amount),
                goal.period
            ));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_submit(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    app.screen = Screen::AddTransaction;
    submit_form(app, db)
}

fn cmd_clear(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.form.reset(chrono::Local::now().date_naive());
    app.set_status("Form cleared");
    Ok(())
}

fn cmd_export(args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    let path = if args.is_empty() {
        PathBuf::from(export::DEFAULT_EXPORT_FILE)
    } else {
        PathBuf::from(crate::run::shellexpand(args))
    };

    let count = export::export_monthly(&path, &app.monthly_trend)?;
    app.set_status(format!("Exported {count} months to {}", path.display()));
    Ok(())
}
