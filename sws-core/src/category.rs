use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-level groundwater stress status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroundwaterStatus {
    Safe,
    Warning,
    Critical,
}

impl GroundwaterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroundwaterStatus::Safe => "Safe",
            GroundwaterStatus::Warning => "Warning",
            GroundwaterStatus::Critical => "Critical",
        }
    }
}

impl fmt::Display for GroundwaterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordinal drought risk category. The derived ordering is the risk
/// ordering: `Safe < Warning < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    Safe,
    Warning,
    Critical,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 3] = [
        RiskCategory::Safe,
        RiskCategory::Warning,
        RiskCategory::Critical,
    ];

    /// Ordinal label used as the classifier target.
    pub fn label(&self) -> u32 {
        match self {
            RiskCategory::Safe => 0,
            RiskCategory::Warning => 1,
            RiskCategory::Critical => 2,
        }
    }

    pub fn from_label(label: u32) -> Option<RiskCategory> {
        match label {
            0 => Some(RiskCategory::Safe),
            1 => Some(RiskCategory::Warning),
            2 => Some(RiskCategory::Critical),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Safe => "Safe",
            RiskCategory::Warning => "Warning",
            RiskCategory::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_ordinal_order() {
        assert!(RiskCategory::Safe < RiskCategory::Warning);
        assert!(RiskCategory::Warning < RiskCategory::Critical);
        for risk in RiskCategory::ALL {
            assert_eq!(RiskCategory::from_label(risk.label()), Some(risk));
        }
        assert_eq!(RiskCategory::from_label(3), None);
    }
}
