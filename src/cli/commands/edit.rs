use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, TripChanges};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        name,
        category,
        start,
        end,
    } = cmd
    {
        let changes = TripChanges {
            name: name.clone(),
            category: category
                .as_deref()
                .map(|c| cfg.resolve_category(c))
                .transpose()?,
            start: date::parse_optional(start.as_ref())?,
            end: date::parse_optional(end.as_ref())?,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let trip = EditLogic::apply(&mut pool, cfg, *id, changes, date::today())?;

        success(format!("Trip #{} '{}' updated.", trip.id, trip.name));
    }

    Ok(())
}
