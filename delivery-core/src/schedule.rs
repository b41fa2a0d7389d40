use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Recurring weekly blackout window during which priority delivery is
/// suppressed for non-priority products.
///
/// Weekdays are numbered 0 (Sunday) through 6 (Saturday). The window applies
/// on a given day only when that day is present in *both* weekday sets, which
/// lets an admin scope the blackout to specific days rather than a contiguous
/// range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackoutWindow {
    pub from_weekdays: BTreeSet<u8>,
    pub to_weekdays: BTreeSet<u8>,
    pub from_time: NaiveTime,
    pub to_time: NaiveTime,
    pub tooltip: Option<String>,
}

impl BlackoutWindow {
    /// True when the given weekday/time falls inside the window.
    ///
    /// Both ends of the time range are inclusive. A window with
    /// `to_time < from_time` is empty; it never wraps past midnight.
    pub fn covers(&self, weekday: u8, time: NaiveTime) -> bool {
        self.from_weekdays.contains(&weekday)
            && self.to_weekdays.contains(&weekday)
            && time >= self.from_time
            && time <= self.to_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> BlackoutWindow {
        BlackoutWindow {
            from_weekdays: BTreeSet::from([0, 3]),
            to_weekdays: BTreeSet::from([0, 3]),
            from_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            to_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            tooltip: None,
        }
    }

    #[test]
    fn test_covers_inside_window() {
        let w = window();
        assert!(w.covers(0, NaiveTime::from_hms_opt(12, 0, 0).unwrap()));
        assert!(w.covers(3, NaiveTime::from_hms_opt(12, 0, 0).unwrap()));
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let w = window();
        assert!(w.covers(0, NaiveTime::from_hms_opt(9, 0, 0).unwrap()));
        assert!(w.covers(0, NaiveTime::from_hms_opt(17, 0, 0).unwrap()));
        assert!(!w.covers(0, NaiveTime::from_hms_opt(8, 59, 59).unwrap()));
        assert!(!w.covers(0, NaiveTime::from_hms_opt(17, 0, 1).unwrap()));
    }

    #[test]
    fn test_weekday_must_be_in_both_sets() {
        let mut w = window();
        w.to_weekdays = BTreeSet::from([3]);
        assert!(!w.covers(0, NaiveTime::from_hms_opt(12, 0, 0).unwrap()));
        assert!(w.covers(3, NaiveTime::from_hms_opt(12, 0, 0).unwrap()));
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let mut w = window();
        w.from_time = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
        w.to_time = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        // No wraparound past midnight: nothing matches.
        assert!(!w.covers(0, NaiveTime::from_hms_opt(12, 0, 0).unwrap()));
        assert!(!w.covers(0, NaiveTime::from_hms_opt(18, 0, 0).unwrap()));
        assert!(!w.covers(0, NaiveTime::from_hms_opt(8, 0, 0).unwrap()));
    }
}
