//! Computed budget distribution
//!
//! A `BudgetResult` is produced whole by the calculator and never edited;
//! a new computation replaces it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::{format_currency, Money};
use super::split::PercentageSplit;

/// The three spend categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpendCategory {
    Needs,
    Wants,
    Savings,
}

impl SpendCategory {
    pub const ALL: [SpendCategory; 3] = [Self::Needs, Self::Wants, Self::Savings];

    /// Localized label used in tables and charts
    pub fn label(&self) -> &'static str {
        match self {
            Self::Needs => "Gastos Necesarios",
            Self::Wants => "Gastos Deseos",
            Self::Savings => "Ahorro e Inversión",
        }
    }
}

impl fmt::Display for SpendCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Percentage and resulting amount for one category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryAllocation {
    pub percentage: u32,
    /// Unrounded share of the total
    pub amount: f64,
}

impl CategoryAllocation {
    /// Amount formatted for display
    pub fn formatted_amount(&self) -> String {
        format_currency(self.amount)
    }
}

/// Distribution of a total income across needs, wants and savings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetResult {
    pub total_income: Money,
    pub needs: CategoryAllocation,
    pub wants: CategoryAllocation,
    pub savings: CategoryAllocation,
}

impl BudgetResult {
    pub fn allocation(&self, category: SpendCategory) -> &CategoryAllocation {
        match category {
            SpendCategory::Needs => &self.needs,
            SpendCategory::Wants => &self.wants,
            SpendCategory::Savings => &self.savings,
        }
    }

    /// Categories paired with their allocations, in display order
    pub fn iter(&self) -> impl Iterator<Item = (SpendCategory, &CategoryAllocation)> + '_ {
        SpendCategory::ALL
            .into_iter()
            .map(move |c| (c, self.allocation(c)))
    }

    /// The split this result was computed with
    pub fn split(&self) -> PercentageSplit {
        PercentageSplit::new(
            self.needs.percentage,
            self.wants.percentage,
            self.savings.percentage,
        )
    }

    /// Sum of the three category amounts
    pub fn allocated_total(&self) -> f64 {
        self.needs.amount + self.wants.amount + self.savings.amount
    }
}
