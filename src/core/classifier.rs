//! Partition trips into current / upcoming / past relative to a given day.

use crate::models::bucket::Bucket;
use crate::models::trip::Trip;
use chrono::NaiveDate;

/// The three views over one trip list, each keeping the input order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Buckets<'a> {
    pub current: Vec<&'a Trip>,
    pub upcoming: Vec<&'a Trip>,
    pub past: Vec<&'a Trip>,
}

impl<'a> Buckets<'a> {
    pub fn get(&self, bucket: Bucket) -> &[&'a Trip] {
        match bucket {
            Bucket::Current => &self.current,
            Bucket::Upcoming => &self.upcoming,
            Bucket::Past => &self.past,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty() && self.upcoming.is_empty() && self.past.is_empty()
    }

    /// Trips from `trips` that landed in none of the three lists
    /// (missing dates, or inverted dates straddling the reference day).
    pub fn unclassified(&self, trips: &'a [Trip]) -> Vec<&'a Trip> {
        trips
            .iter()
            .filter(|t| {
                !Bucket::ALL
                    .iter()
                    .any(|b| self.get(*b).iter().any(|x| std::ptr::eq(*x, *t)))
            })
            .collect()
    }
}

/// Classify `trips` against `today`.
///
/// Each bucket predicate is applied on its own, so membership is not
/// exclusive and nothing is deduplicated.
pub fn classify(trips: &[Trip], today: NaiveDate) -> Buckets<'_> {
    let mut out = Buckets::default();

    for trip in trips {
        if Bucket::Current.contains(trip, today) {
            out.current.push(trip);
        }
        if Bucket::Upcoming.contains(trip, today) {
            out.upcoming.push(trip);
        }
        if Bucket::Past.contains(trip, today) {
            out.past.push(trip);
        }
    }

    out
}
