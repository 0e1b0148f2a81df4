use crate::db::migrate::table_exists;
use crate::db::pool::DbPool;
use crate::db::queries::count_rows;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Tables reported by `db --info`, loader tables and dashboard table alike.
const REPORTED_TABLES: &[&str] = &["check_post_logs", "officers", "traffic_stops", "log"];

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);

    //
    // 2) ROWS PER TABLE
    //
    println!("{}• Tables:{}", CYAN, RESET);
    for table in REPORTED_TABLES {
        if table_exists(&pool.conn, table)? {
            let n = count_rows(&pool.conn, table)?;
            println!("    {:<16} {}{}{} rows", table, GREEN, n, RESET);
        } else {
            println!("    {:<16} {}missing{}", table, GREY, RESET);
        }
    }

    //
    // 3) STOP DATE RANGE
    //
    if table_exists(&pool.conn, "check_post_logs")? {
        let range: Option<(Option<String>, Option<String>)> = pool
            .conn
            .query_row(
                "SELECT MIN(time_stamp), MAX(time_stamp) FROM check_post_logs",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        let (first, last) = range.unwrap_or((None, None));
        let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
        let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

        println!("{}• Check-post stops:{}", CYAN, RESET);
        println!("    from: {}", fmt_first);
        println!("    to:   {}", fmt_last);
    }

    println!();
    Ok(())
}
