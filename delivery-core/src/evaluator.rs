use chrono::{DateTime, Datelike};
use chrono_tz::Tz;

use crate::schedule::BlackoutWindow;

/// Outcome of a priority-delivery check.
///
/// `Unknown` marks an evaluation that could not be completed (bad
/// configuration, collaborator failure). It is kept distinct from `Disabled`
/// so callers can fail open deliberately instead of presenting an error as a
/// legitimate blackout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Enabled { tooltip: Option<String> },
    Disabled,
    Unknown { reason: String },
}

impl DeliveryOutcome {
    /// Outcome for an evaluation that failed; callers treat it as enabled.
    pub fn fail_open(reason: impl Into<String>) -> Self {
        Self::Unknown {
            reason: reason.into(),
        }
    }

    /// The fail-open projection: only a confirmed blackout disables.
    pub fn priority_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Tooltip shown to the shopper; only present on a clean `Enabled`.
    pub fn toolkit(&self) -> Option<&str> {
        match self {
            Self::Enabled { tooltip } => tooltip.as_deref(),
            _ => None,
        }
    }
}

/// Decide whether priority delivery is currently available.
///
/// A nonzero priority flag always allows priority delivery; the blackout
/// window only applies to products with `priority == 0`. `now` must already
/// be in the reference time zone — the caller converts, this function never
/// touches a clock.
pub fn evaluate(priority: i64, window: &BlackoutWindow, now: DateTime<Tz>) -> DeliveryOutcome {
    if priority != 0 {
        return DeliveryOutcome::Enabled {
            tooltip: window.tooltip.clone(),
        };
    }

    let weekday = now.weekday().num_days_from_sunday() as u8;
    let time = now.time();

    tracing::debug!(
        weekday,
        time = %time.format("%H:%M:%S"),
        from = %window.from_time,
        to = %window.to_time,
        "evaluating blackout window"
    );

    if window.covers(weekday, time) {
        tracing::debug!("blackout active, priority delivery disabled");
        DeliveryOutcome::Disabled
    } else {
        DeliveryOutcome::Enabled {
            tooltip: window.tooltip.clone(),
        }
    }
}

/// Fold per-item outcomes into a cart-level outcome.
///
/// `Disabled` dominates: one item in blackout disables priority delivery for
/// the whole cart. `Unknown` beats `Enabled` so a partial failure still fails
/// open at the caller rather than silently reporting a clean result. An empty
/// cart is `Enabled`.
pub fn aggregate(outcomes: impl IntoIterator<Item = DeliveryOutcome>) -> DeliveryOutcome {
    let mut result = DeliveryOutcome::Enabled { tooltip: None };
    for outcome in outcomes {
        result = match (result, outcome) {
            (DeliveryOutcome::Disabled, _) | (_, DeliveryOutcome::Disabled) => {
                DeliveryOutcome::Disabled
            }
            (unknown @ DeliveryOutcome::Unknown { .. }, _) => unknown,
            (_, unknown @ DeliveryOutcome::Unknown { .. }) => unknown,
            (DeliveryOutcome::Enabled { tooltip: Some(t) }, DeliveryOutcome::Enabled { .. }) => {
                DeliveryOutcome::Enabled { tooltip: Some(t) }
            }
            (DeliveryOutcome::Enabled { .. }, enabled) => enabled,
        };
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Pacific::Auckland;
    use std::collections::BTreeSet;

    fn sunday_window() -> BlackoutWindow {
        BlackoutWindow {
            from_weekdays: BTreeSet::from([0]),
            to_weekdays: BTreeSet::from([0]),
            from_time: chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            to_time: chrono::NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            tooltip: Some("Priority delivery unavailable today".to_string()),
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Tz> {
        Auckland.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_nonzero_priority_always_enabled() {
        // 2024-06-16 is a Sunday, squarely inside the window.
        let outcome = evaluate(1, &sunday_window(), at(2024, 6, 16, 12, 0));
        assert_eq!(
            outcome,
            DeliveryOutcome::Enabled {
                tooltip: Some("Priority delivery unavailable today".to_string())
            }
        );
    }

    #[test]
    fn test_blackout_disables_inside_window() {
        let outcome = evaluate(0, &sunday_window(), at(2024, 6, 16, 12, 0));
        assert_eq!(outcome, DeliveryOutcome::Disabled);
        assert!(!outcome.priority_enabled());
        assert_eq!(outcome.toolkit(), None);
    }

    #[test]
    fn test_enabled_outside_time_range_on_matching_day() {
        let outcome = evaluate(0, &sunday_window(), at(2024, 6, 16, 8, 59));
        assert_eq!(
            outcome.toolkit(),
            Some("Priority delivery unavailable today")
        );
        assert!(outcome.priority_enabled());
    }

    #[test]
    fn test_enabled_on_non_matching_day() {
        // 2024-06-17 is a Monday; same time of day as the disabled case.
        let outcome = evaluate(0, &sunday_window(), at(2024, 6, 17, 12, 0));
        assert!(outcome.priority_enabled());
        assert_eq!(
            outcome.toolkit(),
            Some("Priority delivery unavailable today")
        );
    }

    #[test]
    fn test_window_boundaries_inclusive() {
        assert_eq!(
            evaluate(0, &sunday_window(), at(2024, 6, 16, 9, 0)),
            DeliveryOutcome::Disabled
        );
        assert_eq!(
            evaluate(0, &sunday_window(), at(2024, 6, 16, 17, 0)),
            DeliveryOutcome::Disabled
        );
    }

    #[test]
    fn test_weekday_absent_from_one_set_enables() {
        let mut window = sunday_window();
        window.to_weekdays = BTreeSet::from([3]);
        let outcome = evaluate(0, &window, at(2024, 6, 16, 12, 0));
        assert!(outcome.priority_enabled());
    }

    #[test]
    fn test_fail_open_projection() {
        let outcome = DeliveryOutcome::fail_open("config missing");
        assert!(outcome.priority_enabled());
        assert_eq!(outcome.toolkit(), None);
    }

    #[test]
    fn test_aggregate_any_disabled_wins() {
        let outcome = aggregate([
            DeliveryOutcome::Enabled {
                tooltip: Some("msg".to_string()),
            },
            DeliveryOutcome::Disabled,
            DeliveryOutcome::Enabled { tooltip: None },
        ]);
        assert_eq!(outcome, DeliveryOutcome::Disabled);
    }

    #[test]
    fn test_aggregate_unknown_beats_enabled() {
        let outcome = aggregate([
            DeliveryOutcome::Enabled {
                tooltip: Some("msg".to_string()),
            },
            DeliveryOutcome::fail_open("lookup failed"),
        ]);
        assert!(matches!(outcome, DeliveryOutcome::Unknown { .. }));
        assert!(outcome.priority_enabled());
    }

    #[test]
    fn test_aggregate_empty_cart_enabled() {
        let outcome = aggregate(Vec::<DeliveryOutcome>::new());
        assert_eq!(outcome, DeliveryOutcome::Enabled { tooltip: None });
    }

    #[test]
    fn test_aggregate_keeps_tooltip() {
        let outcome = aggregate([
            DeliveryOutcome::Enabled {
                tooltip: Some("msg".to_string()),
            },
            DeliveryOutcome::Enabled {
                tooltip: Some("msg".to_string()),
            },
        ]);
        assert_eq!(outcome.toolkit(), Some("msg"));
    }
}
