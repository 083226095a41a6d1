use crate::core::dates::{DateSequence, LAST_INDEX};
use crate::domain::model::{Direction, SessionStatus};
use crate::utils::error::{PredictorError, Result};
use chrono::NaiveDate;

/// Binary search state over the date sequence.
///
/// Holds `0 <= low <= probe <= high <= LAST_INDEX` with
/// `probe == (low + high) / 2` after every mutation.
#[derive(Debug, Clone)]
pub struct RangeTracker {
    dates: DateSequence,
    low: usize,
    high: usize,
    probe: usize,
    questions: u32,
    status: SessionStatus,
    resolved: Option<usize>,
}

impl RangeTracker {
    pub fn new(dates: DateSequence) -> Self {
        Self {
            dates,
            low: 0,
            high: LAST_INDEX,
            probe: LAST_INDEX / 2,
            questions: 0,
            status: SessionStatus::NotStarted,
            resolved: None,
        }
    }

    pub fn reset(&mut self) {
        self.low = 0;
        self.high = LAST_INDEX;
        self.probe = LAST_INDEX / 2;
        self.questions = 0;
        self.status = SessionStatus::InProgress;
        self.resolved = None;
        tracing::debug!(low = self.low, high = self.high, probe = self.probe, "range reset");
    }

    pub fn dates(&self) -> &DateSequence {
        &self.dates
    }

    pub fn low(&self) -> usize {
        self.low
    }

    pub fn high(&self) -> usize {
        self.high
    }

    pub fn probe(&self) -> usize {
        self.probe
    }

    pub fn questions(&self) -> u32 {
        self.questions
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn resolved(&self) -> Option<usize> {
        self.resolved
    }

    pub fn current_probe_date(&self) -> Result<NaiveDate> {
        self.ensure_in_progress("current_probe_date")?;
        self.dates
            .get(self.probe)
            .ok_or_else(|| PredictorError::invariant(format!("probe {} out of range", self.probe)))
    }

    /// Counts a question about to be posed at the current probe.
    pub fn record_question(&mut self) -> Result<u32> {
        self.ensure_in_progress("record_question")?;
        self.questions += 1;
        Ok(self.questions)
    }

    /// Drops the half of the range excluded by `direction`.
    ///
    /// Returns the resolved index once the range has collapsed to one date.
    pub fn narrow(&mut self, direction: Direction) -> Result<Option<usize>> {
        self.ensure_in_progress("narrow")?;

        match direction {
            Direction::Before => self.high = self.probe,
            Direction::After => self.low = self.probe + 1,
        }
        self.probe = (self.low + self.high) / 2;
        self.check_invariant();

        tracing::debug!(
            ?direction,
            low = self.low,
            high = self.high,
            probe = self.probe,
            "range narrowed"
        );

        if self.low == self.high {
            self.finish_at(self.low)?;
            return Ok(Some(self.low));
        }

        Ok(None)
    }

    /// Ends the session at `index` regardless of the current range.
    pub fn finish_at(&mut self, index: usize) -> Result<()> {
        self.ensure_in_progress("finish_at")?;
        if index > LAST_INDEX {
            return Err(PredictorError::invariant(format!(
                "resolved index {} out of range",
                index
            )));
        }
        self.status = SessionStatus::Finished;
        self.resolved = Some(index);
        Ok(())
    }

    fn ensure_in_progress(&self, operation: &str) -> Result<()> {
        if self.status != SessionStatus::InProgress {
            return Err(PredictorError::invariant(format!(
                "{} called while session is {:?}",
                operation, self.status
            )));
        }
        Ok(())
    }

    fn check_invariant(&self) {
        debug_assert!(
            self.low <= self.probe && self.probe <= self.high && self.high <= LAST_INDEX,
            "range invariant broken: low={} probe={} high={}",
            self.low,
            self.probe,
            self.high
        );
        debug_assert_eq!(self.probe, (self.low + self.high) / 2);
    }
}

impl Default for RangeTracker {
    fn default() -> Self {
        Self::new(DateSequence::new())
    }
}
