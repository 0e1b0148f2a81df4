use super::export_if_requested;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::query::QueryLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Query {
        query,
        list,
        export,
    } = cmd
    {
        if *list {
            QueryLogic::print_menu();
        }

        if let Some(selector) = query {
            let result = QueryLogic::run(&cfg.database, selector)?;
            export_if_requested(&result, export)?;
        }
    }
    Ok(())
}
