use crate::db::schema::{CREATE_LOG_OPERATION_INDEX, CREATE_LOG_TABLE};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// A schema change, applied at most once and recorded in `log`.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: "20261019_0001_log_operation_index",
    description: "Index log entries by operation and target",
    sql: CREATE_LOG_OPERATION_INDEX,
}];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(CREATE_LOG_TABLE)
}

/// Check if a table exists.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let exists: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
            [name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(exists.is_some())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<bool> {
    if is_applied(conn, m.version)? {
        return Ok(false);
    }

    conn.execute_batch(m.sql)?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    success(format!("Migration applied: {} → {}", m.version, m.description));
    Ok(true)
}

/// Public entry point: run all pending migrations.
/// Returns how many migrations were applied by this call.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if apply(conn, m)? {
            applied += 1;
        }
    }
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_run_once() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(run_pending_migrations(&conn).unwrap(), MIGRATIONS.len());
        assert_eq!(run_pending_migrations(&conn).unwrap(), 0);
        assert!(table_exists(&conn, "log").unwrap());
    }

    #[test]
    fn loader_tables_are_not_created_by_migrations() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();
        assert!(!table_exists(&conn, "check_post_logs").unwrap());
        assert!(!table_exists(&conn, "traffic_stops").unwrap());
    }
}
