use super::trip::Trip;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;

/// Where a trip sits relative to a reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Current,
    Upcoming,
    Past,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::Current, Bucket::Upcoming, Bucket::Past];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Current => "current",
            Bucket::Upcoming => "upcoming",
            Bucket::Past => "past",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Bucket::Current => "🧳 Current trips",
            Bucket::Upcoming => "📅 Upcoming trips",
            Bucket::Past => "🏁 Past trips",
        }
    }

    /// Membership test for this bucket alone.
    ///
    /// Buckets are not mutually exclusive: a trip whose end precedes its
    /// start can satisfy both `Upcoming` and `Past`.
    pub fn contains(&self, trip: &Trip, today: NaiveDate) -> bool {
        match self {
            Bucket::Current => match (trip.start_date, trip.end_date) {
                (Some(start), Some(end)) => start <= today && today <= end,
                _ => false,
            },
            Bucket::Upcoming => trip.start_date.is_some_and(|start| start > today),
            Bucket::Past => trip.end_date.is_some_and(|end| end < today),
        }
    }
}
