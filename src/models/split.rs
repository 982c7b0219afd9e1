//! Three-way percentage partition of income
//!
//! A split is only usable for computation when its parts add up to exactly
//! 100. Invalid splits are reported, never adjusted.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::input::parse_percentage;

/// Percentages assigned to needs, wants and savings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PercentageSplit {
    pub needs: u32,
    pub wants: u32,
    pub savings: u32,
}

/// Outcome of checking a split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitValidation {
    pub valid: bool,
    pub total: u32,
}

impl PercentageSplit {
    /// The split pre-filled when the custom method is chosen
    pub const CUSTOM_DEFAULT: PercentageSplit = PercentageSplit::new(50, 30, 20);

    pub const fn new(needs: u32, wants: u32, savings: u32) -> Self {
        Self {
            needs,
            wants,
            savings,
        }
    }

    /// Build a split from three raw text fields
    pub fn from_raw(needs: &str, wants: &str, savings: &str) -> Self {
        Self::new(
            parse_percentage(needs),
            parse_percentage(wants),
            parse_percentage(savings),
        )
    }

    /// Sum of the three parts
    pub fn total(&self) -> u32 {
        self.needs
            .saturating_add(self.wants)
            .saturating_add(self.savings)
    }

    pub fn validate(&self) -> SplitValidation {
        validate(self.needs, self.wants, self.savings)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().valid
    }
}

impl Default for PercentageSplit {
    fn default() -> Self {
        Self::CUSTOM_DEFAULT
    }
}

impl fmt::Display for PercentageSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.needs, self.wants, self.savings)
    }
}

/// Check that three percentages add up to exactly 100
pub fn validate(needs: u32, wants: u32, savings: u32) -> SplitValidation {
    let total = needs.saturating_add(wants).saturating_add(savings);
    SplitValidation {
        valid: total == 100,
        total,
    }
}

impl SplitValidation {
    /// Feedback line shown next to the custom percentage fields
    pub fn message(&self) -> String {
        if self.valid {
            "✅ Porcentajes válidos (suman 100%)".to_string()
        } else {
            format!(
                "⚠️ Los porcentajes deben sumar 100% (actual: {}%)",
                self.total
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_exact_hundred() {
        assert_eq!(
            validate(50, 30, 20),
            SplitValidation {
                valid: true,
                total: 100
            }
        );
    }

    #[test]
    fn test_validate_off_by_one() {
        let v = validate(50, 30, 21);
        assert!(!v.valid);
        assert_eq!(v.total, 101);

        let v = validate(50, 30, 19);
        assert!(!v.valid);
        assert_eq!(v.total, 99);
    }

    #[test]
    fn test_validate_extremes() {
        assert!(validate(100, 0, 0).valid);
        assert!(!validate(0, 0, 0).valid);
        assert!(!validate(u32::MAX, 1, 1).valid);
    }

    #[test]
    fn test_from_raw() {
        let split = PercentageSplit::from_raw("60", " 25", "15%");
        assert_eq!(split, PercentageSplit::new(60, 25, 15));
        assert!(split.is_valid());

        let split = PercentageSplit::from_raw("", "abc", "40");
        assert_eq!(split.total(), 40);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            validate(50, 30, 20).message(),
            "✅ Porcentajes válidos (suman 100%)"
        );
        assert_eq!(
            validate(50, 30, 19).message(),
            "⚠️ Los porcentajes deben sumar 100% (actual: 99%)"
        );
    }

    #[test]
    fn test_display_and_default() {
        assert_eq!(PercentageSplit::default().to_string(), "50/30/20");
    }
}
