use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::query_result::{Cell, QueryResult};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Pretty-printed array of `{column: value}` objects.
pub(crate) fn export_json(result: &QueryResult, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&result.to_json_records())?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// CSV with a header row; NULL becomes an empty field.
pub(crate) fn export_csv(result: &QueryResult, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(&result.columns)?;

    for row in &result.rows {
        wtr.write_record(row.iter().map(Cell::to_string))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
