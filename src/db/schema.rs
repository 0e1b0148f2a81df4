//! SQLite schema definitions.
//!
//! `check_post_logs` and `officers` are created by the loader, the `log`
//! table by the migration engine. Column names are lower-case so that
//! `SELECT *` reports them exactly as the dashboard looks them up.

/// Traffic stops recorded at the check post.
pub const CREATE_CHECK_POST_LOGS: &str = r"
CREATE TABLE IF NOT EXISTS check_post_logs (
    id                 INTEGER PRIMARY KEY AUTOINCREMENT,
    vehicle_number     VARCHAR(50),
    driver_id          INT,
    officer_id         INT,
    time_stamp         TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    status             VARCHAR(20),
    drugs_related_stop BOOLEAN
)
";

pub const CREATE_OFFICERS: &str = r"
CREATE TABLE IF NOT EXISTS officers (
    officer_id    INTEGER PRIMARY KEY AUTOINCREMENT,
    name          VARCHAR(100) NOT NULL,
    post_location VARCHAR(100),
    shift_time    VARCHAR(50)
)
";

/// Internal operation log.
pub const CREATE_LOG_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS log (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    date      TEXT NOT NULL,
    operation TEXT NOT NULL,
    target    TEXT DEFAULT '',
    message   TEXT NOT NULL
)
";

pub const CREATE_LOG_OPERATION_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_log_operation ON log(operation, target)
";

/// Loader tables in creation order, with the name printed after each one.
pub const LOADER_TABLES: &[(&str, &str)] = &[
    ("check_post_logs", CREATE_CHECK_POST_LOGS),
    ("officers", CREATE_OFFICERS),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_post_logs_has_loader_columns() {
        for col in [
            "vehicle_number",
            "driver_id",
            "officer_id",
            "time_stamp",
            "status",
            "drugs_related_stop",
        ] {
            assert!(CREATE_CHECK_POST_LOGS.contains(col), "missing {col}");
        }
    }

    #[test]
    fn officers_name_is_required() {
        assert!(CREATE_OFFICERS.contains("name          VARCHAR(100) NOT NULL"));
    }

    #[test]
    fn loader_tables_are_idempotent() {
        for (_, ddl) in LOADER_TABLES {
            assert!(ddl.contains("IF NOT EXISTS"));
        }
    }
}
