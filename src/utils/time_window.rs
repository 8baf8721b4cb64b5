use chrono::{NaiveTime, Timelike};

/// Wall-clock shift window in minutes since midnight.
///
/// An end time numerically before the start means the shift runs past
/// midnight, so the end is pushed forward a day (22:00-06:00 becomes
/// 1320-1800). Windows are half-open: `[start, end)`, so back-to-back shifts
/// sharing a boundary do not overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeWindow {
    start_min: i32,
    end_min: i32,
}

const MINUTES_PER_DAY: i32 = 24 * 60;

impl TimeWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        let start_min = (start.hour() * 60 + start.minute()) as i32;
        let mut end_min = (end.hour() * 60 + end.minute()) as i32;
        if end_min < start_min {
            end_min += MINUTES_PER_DAY;
        }
        Self { start_min, end_min }
    }

    pub fn duration_hours(&self) -> f64 {
        f64::from(self.end_min - self.start_min) / 60.0
    }

    /// Overlap test for two windows anchored to the same calendar date.
    ///
    /// A midnight-crossing window extends past 24:00, where it can collide
    /// with the early hours of the other window, so each window is also
    /// tested shifted one day forward.
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        fn raw(a_start: i32, a_end: i32, b_start: i32, b_end: i32) -> bool {
            a_start < b_end && b_start < a_end
        }

        raw(self.start_min, self.end_min, other.start_min, other.end_min)
            || raw(
                self.start_min + MINUTES_PER_DAY,
                self.end_min + MINUTES_PER_DAY,
                other.start_min,
                other.end_min,
            )
            || raw(
                self.start_min,
                self.end_min,
                other.start_min + MINUTES_PER_DAY,
                other.end_min + MINUTES_PER_DAY,
            )
    }
}
