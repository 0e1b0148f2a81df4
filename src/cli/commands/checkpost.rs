use super::export_if_requested;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkpost::CheckpostLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkpost { limit, export } = cmd {
        let data = CheckpostLogic::show(&cfg.database, limit.unwrap_or(cfg.checkpost_limit));
        export_if_requested(&data, export)?;
    }
    Ok(())
}
