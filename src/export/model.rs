use crate::models::bucket::Bucket;
use crate::models::trip::Trip;
use chrono::NaiveDate;
use serde::Serialize;

/// Flat export row. Missing dates are written as empty strings.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TripExport {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub start_date: String,
    pub end_date: String,
    /// Buckets the trip belonged to on the export day, `|`-separated.
    pub buckets: String,
    pub created_at: String,
}

impl TripExport {
    pub fn from_trip(trip: &Trip, today: NaiveDate) -> Self {
        let buckets: Vec<&str> = Bucket::ALL
            .iter()
            .filter(|b| b.contains(trip, today))
            .map(|b| b.as_str())
            .collect();

        Self {
            id: trip.id,
            name: trip.name.clone(),
            category: trip.category.clone(),
            start_date: trip.start_str().unwrap_or_default(),
            end_date: trip.end_str().unwrap_or_default(),
            buckets: buckets.join("|"),
            created_at: trip.created_at.clone(),
        }
    }
}
