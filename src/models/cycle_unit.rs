use serde::{Deserialize, Serialize};

/// Time unit of a contribution cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleUnit {
    #[default]
    Days,
    Weeks,
    Months,
}

impl CycleUnit {
    /// All units in display order
    pub const ALL: [CycleUnit; 3] = [CycleUnit::Days, CycleUnit::Weeks, CycleUnit::Months];

    /// Convert from form string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "days" => Ok(CycleUnit::Days),
            "weeks" => Ok(CycleUnit::Weeks),
            "months" => Ok(CycleUnit::Months),
            _ => Err(format!("Invalid cycle unit: {}", s)),
        }
    }

    /// Convert to form string
    pub fn as_str(&self) -> &'static str {
        match self {
            CycleUnit::Days => "days",
            CycleUnit::Weeks => "weeks",
            CycleUnit::Months => "months",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_unit_conversion() {
        for unit in CycleUnit::ALL {
            assert_eq!(CycleUnit::from_str(unit.as_str()).unwrap(), unit);
        }
        assert!(CycleUnit::from_str("fortnights").is_err());
        assert!(CycleUnit::from_str("").is_err());
    }
}
