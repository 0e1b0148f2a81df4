use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::models::query_result::QueryResult;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use std::fs;

pub struct ExportLogic;

impl ExportLogic {
    /// Write a fetched result to `file` in the requested format.
    /// An empty result writes nothing.
    pub fn export_result(
        result: &QueryResult,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        if result.is_empty() {
            warning("No rows to export.");
            return Ok(());
        }

        let path = expand_tilde(file);
        ensure_writable(&path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        match format {
            ExportFormat::Csv => export_csv(result, &path),
            ExportFormat::Json => export_json(result, &path),
        }
    }
}
