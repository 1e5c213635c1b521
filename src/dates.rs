use chrono::{Days, NaiveDate};

/// Inclusive range of calendar dates, advancing one day per step.
///
/// An empty range (start after end) yields nothing. The range is `Clone`,
/// so callers can iterate a copy and keep the original for another pass.
#[derive(Debug, Clone)]
pub struct DateRange {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            next: (start <= end).then_some(start),
            end,
        }
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        self.next = (current < self.end)
            .then(|| current.checked_add_days(Days::new(1)))
            .flatten();
        Some(current)
    }
}
