//! Threshold rules applied to each representative price.
//!
//! Rules are evaluated in declaration order. A `FailBelow` match rejects
//! the snapshot immediately; a `WarnAbove` match is recorded and
//! evaluation continues with the next rule.

/// Prices below this are treated as corrupt data rather than market moves.
pub const DATA_ERROR_FLOOR: f64 = 1_000.0;

/// Low edge of the plausible operating band.
pub const LOW_BAND_EDGE: f64 = 10_000.0;

/// High edge of the plausible operating band.
pub const HIGH_BAND_EDGE: f64 = 500_000.0;

/// `WarnAbove` rules only match when their threshold sits above this
/// cutoff; thresholds inside the operating band never produce warnings.
pub const HIGH_VALUE_CUTOFF: f64 = 100_000.0;

/// A single threshold rule.
#[derive(Debug, Clone, PartialEq)]
pub enum AlertRule {
    /// Reject the snapshot when the price drops below `threshold`.
    FailBelow { threshold: f64, message: String },

    /// Record a warning when the price rises above `threshold`.
    WarnAbove { threshold: f64, message: String },
}

/// Outcome of matching one rule against a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
    /// Rule did not match.
    Pass,
    /// Warn threshold crossed; evaluation continues.
    Warn,
    /// Fail threshold breached; evaluation must stop.
    Fail,
}

impl AlertRule {
    pub fn message(&self) -> &str {
        match self {
            AlertRule::FailBelow { message, .. } | AlertRule::WarnAbove { message, .. } => message,
        }
    }

    /// Match this rule against `price`. Pure; no side effects.
    pub fn check(&self, price: f64) -> RuleOutcome {
        match self {
            AlertRule::FailBelow { threshold, .. } if price < *threshold => RuleOutcome::Fail,
            AlertRule::WarnAbove { threshold, .. }
                if price > *threshold && *threshold > HIGH_VALUE_CUTOFF =>
            {
                RuleOutcome::Warn
            }
            _ => RuleOutcome::Pass,
        }
    }
}

/// Immutable, ordered rule list fixed at construction time.
#[derive(Debug, Clone)]
pub struct AlertRuleSet {
    rules: Vec<AlertRule>,
}

impl AlertRuleSet {
    pub fn new(rules: Vec<AlertRule>) -> Self {
        Self { rules }
    }

    /// Rules in declaration order. Restartable: every call yields the same
    /// sequence.
    pub fn iter(&self) -> std::slice::Iter<'_, AlertRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for AlertRuleSet {
    /// Stock rule set for an asset quoted in the tens of thousands: a
    /// data-error floor and two verify-source warnings bracketing the
    /// operating band.
    fn default() -> Self {
        Self::new(vec![
            AlertRule::FailBelow {
                threshold: DATA_ERROR_FLOOR,
                message: "price below data-error floor".into(),
            },
            AlertRule::WarnAbove {
                threshold: LOW_BAND_EDGE,
                message: "price near the low edge of the expected band, verify source".into(),
            },
            AlertRule::WarnAbove {
                threshold: HIGH_BAND_EDGE,
                message: "price above the expected band, verify source".into(),
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fail_below(threshold: f64) -> AlertRule {
        AlertRule::FailBelow {
            threshold,
            message: "fail".into(),
        }
    }

    fn warn_above(threshold: f64) -> AlertRule {
        AlertRule::WarnAbove {
            threshold,
            message: "warn".into(),
        }
    }

    #[test]
    fn fail_below_matches_only_under_threshold() {
        let rule = fail_below(1_000.0);

        assert_eq!(rule.check(999.9), RuleOutcome::Fail);
        assert_eq!(rule.check(1_000.0), RuleOutcome::Pass);
        assert_eq!(rule.check(60_000.0), RuleOutcome::Pass);
    }

    #[test]
    fn warn_above_matches_over_threshold() {
        let rule = warn_above(500_000.0);

        assert_eq!(rule.check(600_000.0), RuleOutcome::Warn);
        assert_eq!(rule.check(500_000.0), RuleOutcome::Pass);
        assert_eq!(rule.check(60_000.0), RuleOutcome::Pass);
    }

    #[test]
    fn warn_threshold_under_cutoff_never_matches() {
        let rule = warn_above(LOW_BAND_EDGE);

        assert_eq!(rule.check(60_000.0), RuleOutcome::Pass);
        assert_eq!(rule.check(99_000.0), RuleOutcome::Pass);
    }

    #[test]
    fn default_set_orders_floor_first() {
        let set = AlertRuleSet::default();
        let rules: Vec<_> = set.iter().collect();

        assert_eq!(set.len(), 3);
        assert!(matches!(rules[0], AlertRule::FailBelow { .. }));
        assert!(matches!(rules[1], AlertRule::WarnAbove { .. }));
        assert!(matches!(rules[2], AlertRule::WarnAbove { .. }));
    }

    #[test]
    fn iteration_is_restartable() {
        let set = AlertRuleSet::default();

        let first: Vec<_> = set.iter().cloned().collect();
        let second: Vec<_> = set.iter().cloned().collect();

        assert_eq!(first, second);
    }
}
