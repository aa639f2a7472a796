//! The cycle log and the statistics derived from it.

use chrono::NaiveDate;
use rand::Rng;
use uuid::Uuid;

use crate::advisory::{advisory_for, AdvisorySink};
use crate::config::Config;
use crate::date::days_between;
use crate::error::{Error, Result};
use crate::prediction::predict_from;
use crate::types::{Advisory, Cycle, IrregularSpan, PredictedPeriod};

/// Fold one recorded cycle length into the running average.
///
/// The average moves halfway toward the new length, rounding down, so a
/// single unusual cycle shifts the estimate without dominating it.
pub fn advance_average(old_average: i64, cycle_length: i64) -> i64 {
    (old_average + cycle_length).div_euclid(2)
}

/// In-memory log of recorded cycles plus the running average length.
///
/// Entries are kept in the order they were recorded. Irregularity checks
/// compare consecutive entries and predictions anchor on the most recently
/// recorded cycle, so callers that care about chronology should record
/// cycles oldest first.
pub struct CycleTracker {
    cycles: Vec<Cycle>,
    average_cycle_length: i64,
    irregularity_threshold_days: i64,
    min_cycle_days: i64,
    max_cycle_days: i64,
    periods_ahead: u32,
}

impl CycleTracker {
    /// Create a tracker with the default tuning.
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Create a tracker tuned by `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            cycles: Vec::new(),
            average_cycle_length: config.tracking.initial_average_days,
            irregularity_threshold_days: config.tracking.irregularity_threshold_days,
            min_cycle_days: config.prediction.min_cycle_days,
            max_cycle_days: config.prediction.max_cycle_days,
            periods_ahead: config.prediction.periods_ahead,
        }
    }

    /// Recorded cycles, oldest entry first.
    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    /// Current running average cycle length in days.
    pub fn average_cycle_length(&self) -> i64 {
        self.average_cycle_length
    }

    /// Record a cycle and fold its length into the running average.
    ///
    /// Any symptom with a known care tip is delivered to `sink` in entry
    /// order. A range whose end precedes its start is rejected before
    /// anything is stored or delivered.
    pub fn add_cycle(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
        symptoms: Vec<String>,
        sink: &mut dyn AdvisorySink,
    ) -> Result<()> {
        if end < start {
            return Err(Error::InvalidCycleRange { start, end });
        }

        let length = days_between(start, end);
        let advisories: Vec<Advisory> = symptoms
            .iter()
            .filter_map(|symptom| {
                advisory_for(symptom).map(|tip| Advisory {
                    symptom: symptom.clone(),
                    tip,
                })
            })
            .collect();

        self.average_cycle_length = advance_average(self.average_cycle_length, length);
        self.cycles.push(Cycle {
            id: Uuid::new_v4(),
            start,
            end,
            symptoms,
        });

        tracing::debug!(
            "Recorded cycle of {} days, average is now {} ({} total)",
            length,
            self.average_cycle_length,
            self.cycles.len()
        );

        for advisory in &advisories {
            sink.notify(advisory);
        }

        Ok(())
    }

    /// Flag consecutive entries whose start-to-start gap strays from the
    /// running average by more than the configured threshold.
    pub fn check_irregular_cycles(&self) -> Vec<IrregularSpan> {
        self.cycles
            .windows(2)
            .filter_map(|pair| {
                let gap = days_between(pair[0].start, pair[1].start);
                if (gap - self.average_cycle_length).abs() > self.irregularity_threshold_days {
                    Some(IrregularSpan {
                        from_start: pair[0].start,
                        to_start: pair[1].start,
                        gap_days: gap,
                    })
                } else {
                    None
                }
            })
            .collect()
    }

    /// Predict the next periods, chained forward from the end of the most
    /// recently recorded cycle.
    pub fn predict_future_periods<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<PredictedPeriod>> {
        let last = self.cycles.last().ok_or(Error::NoCycleData)?;
        let periods = predict_from(
            last.end,
            self.periods_ahead,
            self.min_cycle_days..=self.max_cycle_days,
            rng,
        );
        tracing::debug!(
            "Predicted {} upcoming periods from anchor {}",
            periods.len(),
            last.end
        );
        Ok(periods)
    }
}

impl Default for CycleTracker {
    fn default() -> Self {
        Self::new()
    }
}
