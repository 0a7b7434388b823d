use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::find_trip;
use crate::errors::{AppError, AppResult};
use crate::models::bucket::Bucket;
use crate::utils::colors::{CYAN, RESET, color_for_bucket, colorize_optional};
use chrono::NaiveDate;

pub struct ShowLogic;

impl ShowLogic {
    /// Detail view of a single trip.
    pub fn print(pool: &mut DbPool, cfg: &Config, id: i64, today: NaiveDate) -> AppResult<()> {
        let trip = find_trip(&pool.conn, id)?.ok_or(AppError::TripNotFound(id))?;
        let fmt = &cfg.date_format;

        println!("🧭 Trip #{}\n", trip.id);
        println!("{CYAN}• Name:{RESET}       {}", trip.name);
        println!("{CYAN}• Category:{RESET}   {}", trip.category);
        println!(
            "{CYAN}• Start Date:{RESET} {}",
            colorize_optional(&trip.start_display(fmt))
        );
        println!(
            "{CYAN}• End Date:{RESET}   {}",
            colorize_optional(&trip.end_display(fmt))
        );

        if let Some(days) = trip.duration_days() {
            println!("{CYAN}• Length:{RESET}     {} day(s)", days);
        }

        let status: Vec<String> = Bucket::ALL
            .iter()
            .filter(|b| b.contains(&trip, today))
            .map(|b| format!("{}{}{}", color_for_bucket(*b), b.as_str(), RESET))
            .collect();

        if !status.is_empty() {
            println!("{CYAN}• Status:{RESET}     {}", status.join(", "));
        }

        Ok(())
    }
}
