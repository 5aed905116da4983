//! Drought risk waterfall.

use super::{Rule, Waterfall};
use sws_core::{DailyRecord, RiskCategory};

#[derive(Debug, Clone, Copy, PartialEq)]
/// Rolling rainfall and the gap are `None` before the series has enough
/// history; any rule comparing them then fails.
pub struct DroughtInputs {
    pub reservoir_pct: f64,
    pub rain_30d_avg: Option<f64>,
    pub groundwater_mbgl: f64,
    pub water_gap_mld: Option<f64>,
}

impl From<&DailyRecord> for DroughtInputs {
    fn from(record: &DailyRecord) -> Self {
        DroughtInputs {
            reservoir_pct: record.raw.reservoir_pct,
            rain_30d_avg: Some(record.rain_30d_avg),
            groundwater_mbgl: record.raw.groundwater_mbgl,
            water_gap_mld: Some(record.water_gap_mld),
        }
    }
}

fn reservoir_nearly_empty(i: &DroughtInputs) -> bool {
    i.reservoir_pct < 25.0
}

fn dry_month_over_deep_table(i: &DroughtInputs) -> bool {
    i.rain_30d_avg.is_some_and(|r| r < 2.0) && i.groundwater_mbgl > 18.0
}

fn low_reservoir_with_deficit(i: &DroughtInputs) -> bool {
    i.reservoir_pct < 50.0 && i.water_gap_mld.is_some_and(|g| g < 0.0)
}

/// The two Critical rules together form the single "reservoir below 25%
/// OR (dry month AND deep water table)" condition.
pub const DROUGHT_WATERFALL: Waterfall<'static, DroughtInputs, RiskCategory> = Waterfall {
    rules: &[
        Rule {
            name: "reservoir below 25%",
            predicate: reservoir_nearly_empty,
            outcome: RiskCategory::Critical,
        },
        Rule {
            name: "30-day rainfall below 2 mm over a water table deeper than 18 mbgl",
            predicate: dry_month_over_deep_table,
            outcome: RiskCategory::Critical,
        },
        Rule {
            name: "reservoir below 50% with a supply deficit",
            predicate: low_reservoir_with_deficit,
            outcome: RiskCategory::Warning,
        },
    ],
    fallback: RiskCategory::Safe,
};

pub fn classify_drought_risk(inputs: &DroughtInputs) -> RiskCategory {
    DROUGHT_WATERFALL.evaluate(inputs)
}

/// Name of the rule that decided the category, or `None` for the Safe
/// fallback.
pub fn drought_risk_reason(inputs: &DroughtInputs) -> Option<&'static str> {
    DROUGHT_WATERFALL.first_match(inputs).map(|rule| rule.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(reservoir_pct: f64, rain_30d_avg: f64, groundwater_mbgl: f64, water_gap_mld: f64) -> DroughtInputs {
        DroughtInputs {
            reservoir_pct,
            rain_30d_avg: Some(rain_30d_avg),
            groundwater_mbgl,
            water_gap_mld: Some(water_gap_mld),
        }
    }

    #[test]
    fn empty_reservoir_is_critical_first() {
        let i = inputs(20.0, 1.0, 19.0, -10.0);
        assert_eq!(classify_drought_risk(&i), RiskCategory::Critical);
        // both critical clauses hold; the reservoir rule is listed first
        assert_eq!(drought_risk_reason(&i), Some("reservoir below 25%"));
    }

    #[test]
    fn dry_spell_over_deep_table_is_critical() {
        let i = inputs(80.0, 1.5, 19.0, 50.0);
        assert_eq!(classify_drought_risk(&i), RiskCategory::Critical);
        assert_eq!(
            drought_risk_reason(&i),
            Some("30-day rainfall below 2 mm over a water table deeper than 18 mbgl")
        );
    }

    #[test]
    fn critical_outranks_warning() {
        // also satisfies the Warning rule (reservoir < 50, gap < 0)
        let i = inputs(30.0, 0.5, 25.0, -40.0);
        assert_eq!(classify_drought_risk(&i), RiskCategory::Critical);
    }

    #[test]
    fn low_reservoir_deficit_is_warning() {
        let i = inputs(40.0, 5.0, 10.0, -1.0);
        assert_eq!(classify_drought_risk(&i), RiskCategory::Warning);
    }

    #[test]
    fn low_reservoir_without_deficit_is_safe() {
        assert_eq!(classify_drought_risk(&inputs(40.0, 5.0, 10.0, 0.0)), RiskCategory::Safe);
    }

    #[test]
    fn full_reservoir_with_surplus_is_safe() {
        let i = inputs(80.0, 5.0, 10.0, 25.0);
        assert_eq!(classify_drought_risk(&i), RiskCategory::Safe);
        assert_eq!(drought_risk_reason(&i), None);
    }

    #[test]
    fn undefined_history_only_leaves_reservoir_rule() {
        let without_history = |reservoir_pct| DroughtInputs {
            rain_30d_avg: None,
            water_gap_mld: None,
            ..inputs(reservoir_pct, 0.0, 30.0, -50.0)
        };
        assert_eq!(classify_drought_risk(&without_history(20.0)), RiskCategory::Critical);
        // dry-month and deficit rules cannot fire without history
        assert_eq!(classify_drought_risk(&without_history(40.0)), RiskCategory::Safe);
        assert_eq!(drought_risk_reason(&without_history(40.0)), None);
    }

    #[test]
    fn each_rule_in_isolation() {
        assert!(reservoir_nearly_empty(&inputs(24.9, 9.0, 5.0, 9.0)));
        assert!(!reservoir_nearly_empty(&inputs(25.0, 9.0, 5.0, 9.0)));
        assert!(dry_month_over_deep_table(&inputs(90.0, 1.9, 18.1, 9.0)));
        assert!(!dry_month_over_deep_table(&inputs(90.0, 1.9, 18.0, 9.0)));
        assert!(low_reservoir_with_deficit(&inputs(49.9, 9.0, 5.0, -0.1)));
        assert!(!low_reservoir_with_deficit(&inputs(50.0, 9.0, 5.0, -0.1)));
    }
}
