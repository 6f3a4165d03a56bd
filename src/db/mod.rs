mod schema;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;

use crate::models::{BudgetGoal, Transaction};

const UPSERT_SQL: &str = "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
     ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3";

/// Local key-value store backed by a single SQLite table. Values are JSON.
pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .context("Failed to set database pragmas")?;
        let mut db = Self { conn };
        db.migrate().context("Database migration failed")?;
        db.seed_default_goals()?;
        log::debug!("Opened store at {}", path.display());
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.migrate()?;
        db.seed_default_goals()?;
        Ok(db)
    }

    /// Refuse every write to `key`, so tests can fail one half of a write.
    #[cfg(test)]
    pub(crate) fn block_writes_to(&self, key: &str) -> Result<()> {
        let sql = format!(
            "CREATE TRIGGER block_insert_{0} BEFORE INSERT ON kv WHEN NEW.key = '{0}'
                 BEGIN SELECT RAISE(ABORT, 'writes to {0} are blocked'); END;
             CREATE TRIGGER block_update_{0} BEFORE UPDATE ON kv WHEN NEW.key = '{0}'
                 BEGIN SELECT RAISE(ABORT, 'writes to {0} are blocked'); END;",
            key
        );
        self.conn.execute_batch(&sql)?;
        Ok(())
    }

    fn migrate(&mut self) -> Result<()> {
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .optional()?
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    fn seed_default_goals(&mut self) -> Result<()> {
        if self.get_raw(schema::GOALS_KEY)?.is_some() {
            return Ok(());
        }
        let goals = crate::sample::initial_goals();
        self.save_goals(&goals)?;
        log::info!("Seeded {} sample budget goals", goals.len());
        Ok(())
    }

    // ── Raw key-value access ──────────────────────────────────

    pub(crate) fn get_raw(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?)
    }

    pub(crate) fn put_raw(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            UPSERT_SQL,
            params![key, value, chrono::Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn get_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        match self.get_raw(key)? {
            Some(json) => serde_json::from_str(&json)
                .with_context(|| format!("Stored value under '{key}' is not valid")),
            None => Ok(Vec::new()),
        }
    }

    fn put_list<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let json = serde_json::to_string(items)
            .with_context(|| format!("Failed to serialize value for '{key}'"))?;
        self.put_raw(key, &json)
    }

    // ── Transactions ──────────────────────────────────────────

    /// Full transaction history, oldest first.
    pub(crate) fn get_transactions(&self) -> Result<Vec<Transaction>> {
        self.get_list(schema::TRANSACTIONS_KEY)
    }

    /// Append to the log without touching the goals.
    #[cfg(test)]
    pub(crate) fn append_transaction(&mut self, txn: &Transaction) -> Result<()> {
        self.record_submission(txn, None)
    }

    /// Append `txn` to the log and, when given, replace the goal list, in one
    /// SQLite transaction. Either both writes land or neither does.
    pub(crate) fn record_submission(
        &mut self,
        txn: &Transaction,
        goals: Option<&[BudgetGoal]>,
    ) -> Result<()> {
        let tx = self.conn.transaction()?;
        let existing: Option<String> = tx
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![schema::TRANSACTIONS_KEY],
                |row| row.get(0),
            )
            .optional()?;
        let mut history: Vec<Transaction> = match existing {
            Some(json) => serde_json::from_str(&json).context("Stored transaction log is not valid")?,
            None => Vec::new(),
        };
        history.push(txn.clone());
        let json = serde_json::to_string(&history).context("Failed to serialize transaction log")?;
        let now = chrono::Utc::now().to_rfc3339();
        tx.execute(UPSERT_SQL, params![schema::TRANSACTIONS_KEY, json, now])?;

        if let Some(goals) = goals {
            let json = serde_json::to_string(goals).context("Failed to serialize budget goals")?;
            tx.execute(UPSERT_SQL, params![schema::GOALS_KEY, json, now])
                .context("Failed to save budget goals")?;
        }

        tx.commit()?;
        log::debug!("Transaction log now holds {} records", history.len());
        Ok(())
    }

    pub(crate) fn get_transaction_count(&self) -> Result<usize> {
        Ok(self.get_transactions()?.len())
    }

    // ── Budget goals ──────────────────────────────────────────

    pub(crate) fn get_goals(&self) -> Result<Vec<BudgetGoal>> {
        self.get_list(schema::GOALS_KEY)
    }

    pub(crate) fn save_goals(&self, goals: &[BudgetGoal]) -> Result<()> {
        self.put_list(schema::GOALS_KEY, goals)
    }
}

#[cfg(test)]
mod tests;
