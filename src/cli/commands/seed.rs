use crate::config::Config;
use crate::core::seed::SeedLogic;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    info(format!("Connected to database: {}", cfg.database));

    init_db(&pool.conn)?;
    SeedLogic::seed(&mut pool)?;

    info("Database connection closed.");
    Ok(())
}
