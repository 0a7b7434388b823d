use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::validator::TripDraft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;

/// Add a new trip.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        category,
        start,
        end,
    } = cmd
    {
        //
        // 1. Category: must be one of the configured ones; none given = placeholder
        //
        let category = match category {
            Some(c) => cfg.resolve_category(c)?,
            None => cfg.unselected_category.clone(),
        };

        //
        // 2. Dates default to today
        //
        let draft = TripDraft {
            name: name.clone(),
            category,
            start: date::parse_or_today(start.as_ref())?,
            end: date::parse_or_today(end.as_ref())?,
        };

        //
        // 3. Validate + store
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let id = AddLogic::apply(&mut pool, cfg, draft)?;

        success(format!("Trip '{}' added with id {}.", name, id));
    }

    Ok(())
}
