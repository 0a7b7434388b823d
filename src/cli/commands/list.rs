use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { bucket, today, all } = cmd {
        let today = date::parse_or_today(today.as_ref())?;

        let mut pool = DbPool::new(&cfg.database)?;
        ListLogic::print(&mut pool, cfg, today, *bucket, *all)?;
    }
    Ok(())
}
