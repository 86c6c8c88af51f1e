//! Fee schedule entity

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::support::time::time_of_day;

/// Fee amount in whole currency units.
pub type Fee = u32;

/// Time-of-day band with the fee charged for a pass inside it.
///
/// Both ends are inclusive. A band whose start is after its end contains
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeInterval {
    #[serde(with = "time_of_day")]
    pub start: NaiveTime,
    #[serde(with = "time_of_day")]
    pub end: NaiveTime,
    pub fee: Fee,
}

impl FeeInterval {
    pub fn new(start: NaiveTime, end: NaiveTime, fee: Fee) -> Self {
        Self { start, end, fee }
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time <= self.end
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    fn overlaps(&self, other: &FeeInterval) -> bool {
        !self.is_inverted()
            && !other.is_inverted()
            && self.start <= other.end
            && other.start <= self.end
    }
}

/// Problem found in a schedule table. Reported only; lookups are unaffected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleIssue {
    /// Interval at this index has start after end and never matches.
    Inverted { index: usize },
    /// Both intervals cover some time of day; the earlier one wins.
    Overlap { first: usize, second: usize },
}

impl std::fmt::Display for ScheduleIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inverted { index } => write!(f, "interval #{index} starts after it ends"),
            Self::Overlap { first, second } => {
                write!(f, "intervals #{first} and #{second} overlap, #{first} wins")
            }
        }
    }
}

/// Ordered fee table. Lookup is first match in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeSchedule {
    intervals: Vec<FeeInterval>,
}

impl FeeSchedule {
    pub fn new(intervals: Vec<FeeInterval>) -> Self {
        Self { intervals }
    }

    pub fn intervals(&self) -> &[FeeInterval] {
        &self.intervals
    }

    /// Fee of the first interval containing `time`, or 0 when none does.
    pub fn fee_at(&self, time: NaiveTime) -> Fee {
        // Sub-minute precision is dropped so a 06:29:59 pass still lands in 06:00-06:29.
        let time = time.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(time);
        self.intervals
            .iter()
            .find(|interval| interval.contains(time))
            .map(|interval| interval.fee)
            .unwrap_or(0)
    }

    pub fn inconsistencies(&self) -> Vec<ScheduleIssue> {
        let mut issues = Vec::new();
        for (i, interval) in self.intervals.iter().enumerate() {
            if interval.is_inverted() {
                issues.push(ScheduleIssue::Inverted { index: i });
                continue;
            }
            for (j, later) in self.intervals.iter().enumerate().skip(i + 1) {
                if interval.overlaps(later) {
                    issues.push(ScheduleIssue::Overlap { first: i, second: j });
                }
            }
        }
        issues
    }
}

impl Default for FeeSchedule {
    /// The reference table, including its overlap at 15:29 and the inverted
    /// 17:29-16:59 row.
    fn default() -> Self {
        Self::new(default_intervals())
    }
}

pub fn default_intervals() -> Vec<FeeInterval> {
    let hm = |h: u32, m: u32| NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default();
    vec![
        FeeInterval::new(hm(6, 0), hm(6, 29), 8),
        FeeInterval::new(hm(6, 30), hm(6, 59), 13),
        FeeInterval::new(hm(7, 0), hm(7, 59), 18),
        FeeInterval::new(hm(8, 0), hm(8, 29), 13),
        FeeInterval::new(hm(8, 30), hm(14, 59), 8),
        FeeInterval::new(hm(15, 0), hm(15, 29), 13),
        FeeInterval::new(hm(15, 29), hm(16, 59), 18),
        FeeInterval::new(hm(17, 29), hm(16, 59), 13),
        FeeInterval::new(hm(18, 0), hm(18, 30), 8),
    ]
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn fee_at_band_boundaries_is_inclusive() {
        let s = FeeSchedule::default();
        assert_eq!(s.fee_at(at(6, 0)), 8);
        assert_eq!(s.fee_at(at(6, 29)), 8);
        assert_eq!(s.fee_at(at(6, 30)), 13);
        assert_eq!(s.fee_at(at(18, 30)), 8);
    }

    #[test]
    fn fee_at_reference_times() {
        let s = FeeSchedule::default();
        assert_eq!(s.fee_at(at(7, 0)), 18);
        assert_eq!(s.fee_at(at(8, 0)), 13);
        assert_eq!(s.fee_at(at(15, 15)), 13);
        assert_eq!(s.fee_at(at(15, 31)), 18);
        assert_eq!(s.fee_at(at(16, 0)), 18);
    }

    #[test]
    fn overlap_resolves_to_first_declared() {
        let s = FeeSchedule::default();
        assert_eq!(s.fee_at(at(15, 29)), 13);
    }

    #[test]
    fn uncovered_time_is_free() {
        let s = FeeSchedule::default();
        assert_eq!(s.fee_at(at(5, 59)), 0);
        assert_eq!(s.fee_at(at(17, 15)), 0);
        assert_eq!(s.fee_at(at(17, 45)), 0);
        assert_eq!(s.fee_at(at(18, 31)), 0);
        assert_eq!(s.fee_at(at(23, 0)), 0);
    }

    #[test]
    fn seconds_within_last_minute_still_match() {
        let s = FeeSchedule::default();
        assert_eq!(s.fee_at(NaiveTime::from_hms_opt(6, 29, 59).unwrap()), 8);
    }

    #[test]
    fn empty_schedule_charges_nothing() {
        let s = FeeSchedule::new(Vec::new());
        assert_eq!(s.fee_at(at(7, 30)), 0);
        assert!(s.inconsistencies().is_empty());
    }

    #[test]
    fn reports_default_table_inconsistencies() {
        let issues = FeeSchedule::default().inconsistencies();
        assert_eq!(
            issues,
            vec![
                ScheduleIssue::Overlap { first: 5, second: 6 },
                ScheduleIssue::Inverted { index: 7 },
            ]
        );
    }

    #[test]
    fn issue_display() {
        assert_eq!(
            ScheduleIssue::Inverted { index: 7 }.to_string(),
            "interval #7 starts after it ends"
        );
    }
}
