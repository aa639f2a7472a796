//! Core domain types for the Luna cycle log.

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

/// One recorded menstrual cycle.
///
/// Created once by [`CycleTracker::add_cycle`](crate::tracker::CycleTracker::add_cycle)
/// and immutable afterwards; `start <= end` holds for every stored cycle
/// because reversed ranges are rejected at record time.
#[derive(Clone, Debug, Serialize)]
pub struct Cycle {
    pub id: Uuid,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Free-text symptom tags in the order they were entered.
    pub symptoms: Vec<String>,
}

impl Cycle {
    /// Length of this cycle in whole days (`end - start`).
    pub fn length_days(&self) -> i64 {
        crate::date::days_between(self.start, self.end)
    }
}

/// A symptom tag paired with the health tip it matched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub symptom: String,
    pub tip: &'static str,
}

/// Ovulation estimate and fertile window derived from a next-period start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FertileWindow {
    pub ovulation: NaiveDate,
    pub fertile_start: NaiveDate,
    pub fertile_end: NaiveDate,
}

/// One forward-predicted period together with its fertility derivation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PredictedPeriod {
    pub start: NaiveDate,
    pub fertility: FertileWindow,
}

/// A consecutive pair of recorded cycles whose start-to-start gap strays
/// from the current running average by more than the configured threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IrregularSpan {
    /// Start date of the earlier cycle in the pair.
    pub from_start: NaiveDate,
    /// Start date of the later cycle in the pair.
    pub to_start: NaiveDate,
    /// Day count between the two start dates.
    pub gap_days: i64,
}
