use crate::config::Config;
use crate::core::home::HomeLogic;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    HomeLogic::show(&cfg.home_image);
    Ok(())
}
