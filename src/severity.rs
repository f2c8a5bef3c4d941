//! Alert tiers.
//!
//! Two classification axes exist and they are deliberately kept apart:
//!
//! - [`threshold_tier`] compares a rate directly against the alert threshold.
//!   It drives the Mbps number colors and the row highlight.
//! - [`ratio_tier`] classifies the fill ratio of a bar whose full scale is
//!   twice the alert threshold. It only drives bar colors.
//!
//! A rate sitting exactly on the alert threshold is a WARNING number but only
//! fills half the bar, which sits on the bar's WARNING boundary and is still
//! drawn NORMAL. Between 1.0x and 1.5x the threshold the number is CRITICAL
//! while the bar is WARNING.

/// Severity of a measured value, ordered from least to most severe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    #[default]
    Normal,
    Warning,
    Critical,
}

/// Classify `value` against `alert_threshold`.
///
/// NORMAL up to and including half the threshold, WARNING up to and
/// including the threshold, CRITICAL above it.
pub fn threshold_tier(value: f64, alert_threshold: f64) -> Tier {
    if value > alert_threshold {
        Tier::Critical
    } else if value > alert_threshold * 0.5 {
        Tier::Warning
    } else {
        Tier::Normal
    }
}

/// Fraction of a bar filled by `value` on a scale of `max_reference`,
/// clamped to `[0.0, 1.0]`. Non-positive values leave the bar empty.
pub fn fill_ratio(value: f64, max_reference: f64) -> f64 {
    if value <= 0.0 || max_reference <= 0.0 || value.is_nan() {
        return 0.0;
    }
    (value / max_reference).min(1.0)
}

/// Classify `value` by its fill ratio against `max_reference`.
pub fn ratio_tier(value: f64, max_reference: f64) -> Tier {
    tier_for_ratio(fill_ratio(value, max_reference))
}

fn tier_for_ratio(ratio: f64) -> Tier {
    if ratio > 0.75 {
        Tier::Critical
    } else if ratio > 0.5 {
        Tier::Warning
    } else {
        Tier::Normal
    }
}

/// Bar full scale for a given alert threshold.
pub fn bar_reference(alert_threshold: f64) -> f64 {
    alert_threshold * 2.0
}

/// Fill level and color tier of a throughput bar.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Gauge {
    pub ratio: f64,
    pub tier: Tier,
}

impl Gauge {
    /// Gauge for a rate in Mbps, scaled to twice the alert threshold.
    pub fn for_rate(mbps: f64, alert_threshold: f64) -> Self {
        let ratio = fill_ratio(mbps, bar_reference(alert_threshold));
        Self {
            ratio,
            tier: tier_for_ratio(ratio),
        }
    }

    /// Split a bar of `length` cells into `(filled, empty)`.
    ///
    /// Both parts are always within `[0, length]` and add up to `length`.
    pub fn fill(&self, length: usize) -> (usize, usize) {
        let filled = ((self.ratio * length as f64).round_ties_even().max(0.0) as usize).min(length);
        (filled, length - filled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_bands() {
        assert_eq!(threshold_tier(10.0, 50.0), Tier::Normal);
        assert_eq!(threshold_tier(25.0, 50.0), Tier::Normal);
        assert_eq!(threshold_tier(25.01, 50.0), Tier::Warning);
        assert_eq!(threshold_tier(40.0, 50.0), Tier::Warning);
        assert_eq!(threshold_tier(50.0, 50.0), Tier::Warning);
        assert_eq!(threshold_tier(60.0, 50.0), Tier::Critical);
        assert_eq!(threshold_tier(0.0, 50.0), Tier::Normal);
    }

    #[test]
    fn ratio_bands() {
        let max = bar_reference(50.0);
        assert_eq!(ratio_tier(40.0, max), Tier::Normal);
        assert_eq!(ratio_tier(50.0, max), Tier::Normal);
        assert_eq!(ratio_tier(60.0, max), Tier::Warning);
        assert_eq!(ratio_tier(75.0, max), Tier::Warning);
        assert_eq!(ratio_tier(80.0, max), Tier::Critical);
        assert_eq!(ratio_tier(10_000.0, max), Tier::Critical);
    }

    #[test]
    fn axes_disagree_between_one_and_one_and_a_half_thresholds() {
        let alert = 50.0;
        assert_eq!(threshold_tier(70.0, alert), Tier::Critical);
        assert_eq!(ratio_tier(70.0, bar_reference(alert)), Tier::Warning);
    }

    #[test]
    fn fill_ratio_is_clamped() {
        assert_eq!(fill_ratio(-3.0, 100.0), 0.0);
        assert_eq!(fill_ratio(0.0, 100.0), 0.0);
        assert_eq!(fill_ratio(250.0, 100.0), 1.0);
        assert!((fill_ratio(40.0, 100.0) - 0.4).abs() < 1e-12);
        assert_eq!(fill_ratio(f64::NAN, 100.0), 0.0);
    }

    #[test]
    fn gauge_fill_stays_within_bar() {
        let half = Gauge::for_rate(50.0, 50.0);
        assert_eq!(half.fill(26), (13, 13));
        assert_eq!(half.tier, Tier::Normal);

        let full = Gauge::for_rate(500.0, 50.0);
        assert_eq!(full.fill(26), (26, 0));
        assert_eq!(full.tier, Tier::Critical);

        let idle = Gauge::for_rate(0.0, 50.0);
        assert_eq!(idle.fill(26), (0, 26));

        for length in [0usize, 1, 7, 26] {
            let (filled, empty) = Gauge::for_rate(63.0, 50.0).fill(length);
            assert_eq!(filled + empty, length);
        }
    }

    #[test]
    fn tiers_order_by_severity() {
        assert!(Tier::Normal < Tier::Warning);
        assert!(Tier::Warning < Tier::Critical);
        assert_eq!(Tier::Warning.max(Tier::Critical), Tier::Critical);
    }
}
