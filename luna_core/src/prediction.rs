//! Forward prediction of upcoming periods and fertility windows.
//!
//! Predicted cycle lengths are drawn uniformly from a small inclusive day
//! range and chained: each predicted start becomes the anchor for the next
//! draw, so the second period is predicted relative to the first predicted
//! one, not the recorded data. The random source is supplied by the caller,
//! which lets a session opt into reproducible draws (seeded) or fresh
//! randomness per call.

use crate::date::add_days;
use crate::types::{FertileWindow, PredictedPeriod};
use chrono::NaiveDate;
use rand::Rng;
use std::ops::RangeInclusive;

/// Days from a period start back to the estimated ovulation date.
const OVULATION_OFFSET_DAYS: i64 = 14;
/// Days the fertile window opens before ovulation.
const FERTILE_LEAD_DAYS: i64 = 2;
/// Total span of the fertile window: 2 days before to 1 day after ovulation.
const FERTILE_SPAN_DAYS: i64 = 3;

/// Derive the ovulation date and fertile window for a (predicted or
/// hypothetical) next-period start.
pub fn fertility_for(next_period_start: NaiveDate) -> FertileWindow {
    let ovulation = add_days(next_period_start, -OVULATION_OFFSET_DAYS);
    let fertile_start = add_days(ovulation, -FERTILE_LEAD_DAYS);
    let fertile_end = add_days(fertile_start, FERTILE_SPAN_DAYS);
    FertileWindow {
        ovulation,
        fertile_start,
        fertile_end,
    }
}

/// Chain `count` period predictions forward from `anchor`.
///
/// Each iteration draws a cycle length from `length_range` (inclusive ends),
/// advances the anchor by it, and derives the fertility window for the
/// resulting start date.
pub fn predict_from<R: Rng + ?Sized>(
    anchor: NaiveDate,
    count: u32,
    length_range: RangeInclusive<i64>,
    rng: &mut R,
) -> Vec<PredictedPeriod> {
    let mut anchor = anchor;
    let mut periods = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let length = rng.gen_range(length_range.clone());
        anchor = add_days(anchor, length);
        periods.push(PredictedPeriod {
            start: anchor,
            fertility: fertility_for(anchor),
        });
    }

    periods
}
