//! Dashboard data access: one connection per query, opened and closed here.

use crate::db::pool::DbPool;
use crate::db::queries::run_query;
use crate::errors::AppResult;
use crate::models::query_result::QueryResult;
use crate::ui::messages::error;

/// Run `sql` against an existing database and return every row.
pub fn try_fetch_data(db_path: &str, sql: &str) -> AppResult<QueryResult> {
    let pool = DbPool::open_existing(db_path)?;
    run_query(&pool.conn, sql)
}

/// Like [`try_fetch_data`], but failures are reported to the user and
/// turned into an empty result so that the view can still render.
pub fn fetch_data(db_path: &str, sql: &str) -> QueryResult {
    let pool = match DbPool::open_existing(db_path) {
        Ok(p) => p,
        Err(e) => {
            error(format!("Error connecting to the database: {}", e));
            return QueryResult::default();
        }
    };

    match run_query(&pool.conn, sql) {
        Ok(result) => result,
        Err(e) => {
            error(format!("Error fetching data: {}", e));
            QueryResult::default()
        }
    }
}
