use super::export_if_requested;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::records::RecordsLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Records { export } = cmd {
        let data = RecordsLogic::show(&cfg.database)?;
        export_if_requested(&data, export)?;
    }
    Ok(())
}
