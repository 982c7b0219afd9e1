//! Budget calculator
//!
//! Turns a total income and a percentage split into category amounts, and
//! owns the rule for combining several contributors' incomes.

use serde::Serialize;

use crate::models::{
    BudgetResult, CategoryAllocation, Contributor, Money, PercentageSplit, SpendCategory,
};

/// Stateless budget computations
pub struct BudgetCalculator;

impl BudgetCalculator {
    /// Distribute `total_income` according to `split`
    ///
    /// The caller guarantees a positive total and a split summing to 100.
    /// Amounts use real division and are not rounded.
    pub fn compute(total_income: Money, split: PercentageSplit) -> BudgetResult {
        BudgetResult {
            total_income,
            needs: Self::allocate(total_income, split.needs),
            wants: Self::allocate(total_income, split.wants),
            savings: Self::allocate(total_income, split.savings),
        }
    }

    fn allocate(total_income: Money, percentage: u32) -> CategoryAllocation {
        CategoryAllocation {
            percentage,
            amount: total_income.as_f64() * f64::from(percentage) / 100.0,
        }
    }

    /// Combined income of all contributors
    pub fn combined_income(contributors: &[Contributor]) -> Money {
        contributors.iter().map(|c| c.income).sum()
    }
}

/// Series handed to a chart renderer (doughnut: one slice per category)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<&'static str>,
    pub values: Vec<f64>,
    pub colors: Vec<&'static str>,
    pub total: f64,
}

impl ChartData {
    pub fn from_result(result: &BudgetResult) -> Self {
        let (labels, values): (Vec<_>, Vec<_>) = result
            .iter()
            .map(|(category, allocation)| (category.label(), allocation.amount))
            .unzip();

        Self {
            labels,
            values,
            colors: SpendCategory::ALL.iter().map(category_color).collect(),
            total: result.total_income.as_f64(),
        }
    }

    /// Share of the total for slice `index`, in percent
    pub fn share_of_total(&self, index: usize) -> Option<f64> {
        if self.total <= 0.0 {
            return None;
        }
        self.values.get(index).map(|v| v / self.total * 100.0)
    }

    /// Tooltip text for slice `index` ("Gastos Deseos: $400 mil (10.0%)")
    pub fn tooltip(&self, index: usize) -> Option<String> {
        let label = self.labels.get(index)?;
        let value = self.values.get(index)?;
        let share = self.share_of_total(index)?;
        Some(format!(
            "{}: {} ({:.1}%)",
            label,
            crate::models::money::format_currency(*value),
            share
        ))
    }
}

fn category_color(category: &SpendCategory) -> &'static str {
    match category {
        SpendCategory::Needs => "#ef4444",
        SpendCategory::Wants => "#22c55e",
        SpendCategory::Savings => "#3b82f6",
    }
}
