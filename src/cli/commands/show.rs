use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::show::ShowLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        ShowLogic::print(&mut pool, cfg, *id, date::today())?;
    }
    Ok(())
}
