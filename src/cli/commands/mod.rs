pub mod backup;
pub mod checkpost;
pub mod config;
pub mod db;
pub mod entry;
pub mod home;
pub mod init;
pub mod log;
pub mod query;
pub mod records;
pub mod seed;

use crate::cli::parser::ExportArgs;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::query_result::QueryResult;

/// Write the fetched rows when `--export` was given.
pub(crate) fn export_if_requested(result: &QueryResult, args: &ExportArgs) -> AppResult<()> {
    if let Some(file) = &args.file {
        ExportLogic::export_result(result, args.format, file, args.force)?;
    }
    Ok(())
}
