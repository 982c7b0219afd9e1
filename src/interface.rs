//! Boundary between the budget core and whatever presents it
//!
//! An [`InputSource`] hands over the raw field contents; a
//! [`PresentationSink`] receives everything the core wants shown. The core
//! never formats widgets or touches a terminal itself.

use crate::models::{BudgetResult, Money, SplitValidation, Tip};

/// Raw contents of one contributor's fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributorInput {
    pub name: String,
    pub raw_income: String,
}

impl ContributorInput {
    pub fn new(name: impl Into<String>, raw_income: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_income: raw_income.into(),
        }
    }
}

/// Raw contents of the three custom percentage fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPercentages {
    pub needs: String,
    pub wants: String,
    pub savings: String,
}

impl RawPercentages {
    pub fn new(
        needs: impl Into<String>,
        wants: impl Into<String>,
        savings: impl Into<String>,
    ) -> Self {
        Self {
            needs: needs.into(),
            wants: wants.into(),
            savings: savings.into(),
        }
    }
}

/// Delivers what the user has typed or chosen
pub trait InputSource {
    /// Fields for contributor `index` (0-based); missing fields are empty
    fn contributor_input(&self, index: usize) -> ContributorInput;

    /// Id of the chosen distribution method, if any
    fn selected_method_id(&self) -> Option<String>;

    fn custom_percentages(&self) -> RawPercentages;
}

/// Receives everything the core wants displayed
pub trait PresentationSink {
    /// Live combined income
    fn render_total(&mut self, amount: Money);

    fn render_result(&mut self, result: &BudgetResult);

    fn render_tips(&mut self, tips: &[Tip]);

    /// One human-readable message for a rejected computation
    fn render_error(&mut self, message: &str);

    /// Live feedback for the custom split
    fn render_validation_state(&mut self, valid: bool, total: u32);
}

/// Sink that keeps every call, for reports and tests
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub totals: Vec<Money>,
    pub results: Vec<BudgetResult>,
    pub tips: Vec<Tip>,
    pub errors: Vec<String>,
    pub validations: Vec<SplitValidation>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_result(&self) -> Option<&BudgetResult> {
        self.results.last()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.errors.last().map(String::as_str)
    }
}

impl PresentationSink for RecordingSink {
    fn render_total(&mut self, amount: Money) {
        self.totals.push(amount);
    }

    fn render_result(&mut self, result: &BudgetResult) {
        self.results.push(*result);
    }

    fn render_tips(&mut self, tips: &[Tip]) {
        self.tips = tips.to_vec();
    }

    fn render_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn render_validation_state(&mut self, valid: bool, total: u32) {
        self.validations.push(SplitValidation { valid, total });
    }
}
