use crate::errors::AppResult;
use crate::models::officer::Officer;
use crate::models::query_result::{Cell, QueryResult};
use crate::models::stop_record::StopRecord;
use rusqlite::{Connection, params};

pub fn insert_stop(conn: &Connection, rec: &StopRecord) -> AppResult<()> {
    conn.execute(
        "INSERT INTO check_post_logs (vehicle_number, driver_id, officer_id, time_stamp, status, drugs_related_stop)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            rec.vehicle_number,
            rec.driver_id,
            rec.officer_id,
            rec.time_stamp_str(),
            rec.status,
            rec.drugs_related_stop,
        ],
    )?;
    Ok(())
}

pub fn insert_officer(conn: &Connection, officer: &Officer) -> AppResult<()> {
    conn.execute(
        "INSERT INTO officers (name, post_location, shift_time)
         VALUES (?1, ?2, ?3)",
        params![officer.name, officer.post_location, officer.shift_time],
    )?;
    Ok(())
}

/// Run a literal SQL statement and collect every row, whatever its shape.
pub fn run_query(conn: &Connection, sql: &str) -> AppResult<QueryResult> {
    let mut stmt = conn.prepare(sql)?;

    let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
    let width = columns.len();
    let mut result = QueryResult::new(columns);

    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let mut cells = Vec::with_capacity(width);
        for i in 0..width {
            cells.push(Cell::from(row.get_ref(i)?));
        }
        result.rows.push(cells);
    }

    Ok(result)
}

pub fn count_rows(conn: &Connection, table: &str) -> AppResult<i64> {
    let sql = format!("SELECT COUNT(*) FROM \"{}\"", table.replace('"', "\"\""));
    Ok(conn.query_row(&sql, [], |row| row.get(0))?)
}
