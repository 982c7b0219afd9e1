//! Budget session state
//!
//! A `BudgetSession` holds everything the user has entered so far (names,
//! incomes, chosen method, custom split) and the last successful result.
//! The combined income is kept up to date on every income edit so it can be
//! shown before anything is computed.
//!
//! # Stages
//!
//! ```text
//! Empty -> MethodSelected -> (custom: AwaitingValidPercentages) -> Ready -> Computed
//! ```
//!
//! Editing names, incomes or the split keeps the current stage; only
//! `compute` and `reset` move the session out of `Computed`.
//!
//! `compute` checks its preconditions in a fixed order (names, income,
//! method, custom split) and reports the first one that fails. A failed
//! computation leaves the previous result in place.

use serde::Serialize;
use tracing::{debug, info};

use super::calculator::BudgetCalculator;
use crate::error::{FinanzError, FinanzResult};
use crate::input::parse_money;
use crate::models::{
    BudgetResult, Contributor, DistributionMethod, Money, PercentageSplit, Profile,
    SplitValidation,
};

/// Where the session stands on its way to a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStage {
    /// No method chosen yet
    Empty,
    /// A method is chosen but names or income are still missing
    MethodSelected,
    /// Custom method chosen and the split does not add up to 100
    AwaitingValidPercentages,
    /// Everything needed to compute is in place
    Ready,
    /// The last `compute` call succeeded
    Computed,
}

/// A successful computation together with the inputs it was made from
#[derive(Debug, Clone, PartialEq)]
pub struct Computation {
    pub method: DistributionMethod,
    pub contributors: Vec<Contributor>,
    pub result: BudgetResult,
}

/// State holder for one budgeting session
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSession {
    profile: Profile,
    contributors: Vec<Contributor>,
    total_income: Money,
    selected_method: Option<DistributionMethod>,
    custom_split: PercentageSplit,
    last_computation: Option<Computation>,
    /// Set by a successful `compute`, cleared by a failed one
    computed: bool,
}

impl BudgetSession {
    /// Create an empty session for the given profile
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            contributors: vec![Contributor::default(); profile.contributor_count()],
            total_income: Money::zero(),
            selected_method: None,
            custom_split: PercentageSplit::CUSTOM_DEFAULT,
            last_computation: None,
            computed: false,
        }
    }

    pub fn individual() -> Self {
        Self::new(Profile::Individual)
    }

    pub fn couple() -> Self {
        Self::new(Profile::Couple)
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn contributors(&self) -> &[Contributor] {
        &self.contributors
    }

    pub fn contributor(&self, index: usize) -> FinanzResult<&Contributor> {
        let count = self.contributors.len();
        self.contributors
            .get(index)
            .ok_or(FinanzError::ContributorIndex {
                index,
                contributors: count,
            })
    }

    fn contributor_mut(&mut self, index: usize) -> FinanzResult<&mut Contributor> {
        let count = self.contributors.len();
        self.contributors
            .get_mut(index)
            .ok_or(FinanzError::ContributorIndex {
                index,
                contributors: count,
            })
    }

    /// Labels for each contributor ("Persona N" when unnamed)
    pub fn labels(&self) -> Vec<String> {
        self.contributors
            .iter()
            .enumerate()
            .map(|(i, c)| c.label(i))
            .collect()
    }

    pub fn set_contributor_name(&mut self, index: usize, name: &str) -> FinanzResult<()> {
        self.contributor_mut(index)?.name = name.to_string();
        Ok(())
    }

    /// Set a contributor's income from raw field text; returns the new total
    pub fn set_contributor_income(&mut self, index: usize, raw: &str) -> FinanzResult<Money> {
        self.set_contributor_income_amount(index, parse_money(raw))
    }

    /// Set a contributor's income; returns the new total
    pub fn set_contributor_income_amount(
        &mut self,
        index: usize,
        income: Money,
    ) -> FinanzResult<Money> {
        self.contributor_mut(index)?.income = income;
        self.total_income = BudgetCalculator::combined_income(&self.contributors);
        debug!(index, income = income.pesos(), total = self.total_income.pesos(), "income updated");
        Ok(self.total_income)
    }

    /// Combined income of all contributors
    pub fn total_income(&self) -> Money {
        self.total_income
    }

    /// Choose a distribution method
    ///
    /// Switching to custom pre-fills the split with 50/30/20; re-selecting
    /// the current method leaves the split alone.
    pub fn select_method(&mut self, method: DistributionMethod) {
        if self.selected_method == Some(method) {
            return;
        }
        if method.is_custom() {
            self.custom_split = PercentageSplit::CUSTOM_DEFAULT;
        }
        self.selected_method = Some(method);
        debug!(method = method.id(), "method selected");
    }

    /// Choose a distribution method by registry id
    pub fn select_method_id(&mut self, id: &str) -> FinanzResult<DistributionMethod> {
        let method = DistributionMethod::from_id(id)?;
        self.select_method(method);
        Ok(method)
    }

    /// Drop the chosen method
    pub fn clear_method(&mut self) {
        self.selected_method = None;
    }

    pub fn selected_method(&self) -> Option<DistributionMethod> {
        self.selected_method
    }

    /// Replace the custom split and report whether it is usable
    pub fn set_custom_split(&mut self, split: PercentageSplit) -> SplitValidation {
        self.custom_split = split;
        split.validate()
    }

    /// Replace the custom split from raw field text
    pub fn set_custom_percentages(
        &mut self,
        needs: &str,
        wants: &str,
        savings: &str,
    ) -> SplitValidation {
        self.set_custom_split(PercentageSplit::from_raw(needs, wants, savings))
    }

    pub fn custom_split(&self) -> PercentageSplit {
        self.custom_split
    }

    pub fn custom_validation(&self) -> SplitValidation {
        self.custom_split.validate()
    }

    pub fn last_result(&self) -> Option<&BudgetResult> {
        self.last_computation.as_ref().map(|c| &c.result)
    }

    /// The last successful computation with the method and contributors used
    pub fn last_computation(&self) -> Option<&Computation> {
        self.last_computation.as_ref()
    }

    pub fn stage(&self) -> SessionStage {
        if self.computed {
            return SessionStage::Computed;
        }

        match self.selected_method {
            None => SessionStage::Empty,
            Some(method) if method.is_custom() && !self.custom_split.is_valid() => {
                SessionStage::AwaitingValidPercentages
            }
            Some(_) if self.check_contributors().is_ok() => SessionStage::Ready,
            Some(_) => SessionStage::MethodSelected,
        }
    }

    fn check_contributors(&self) -> FinanzResult<()> {
        if self.profile == Profile::Couple && !self.contributors.iter().all(Contributor::has_name)
        {
            return Err(FinanzError::MissingName);
        }

        if !self.total_income.is_positive() {
            return Err(FinanzError::MissingIncome {
                contributors: self.contributors.len(),
            });
        }

        Ok(())
    }

    /// Check every precondition of `compute`, returning the split to use
    pub fn check_ready(&self) -> FinanzResult<PercentageSplit> {
        self.check_contributors()?;
        let method = self.selected_method.ok_or(FinanzError::NoMethodSelected)?;
        method.resolve(Some(self.custom_split))
    }

    /// Compute and store a new result
    ///
    /// On failure the first unmet precondition is returned, the previous
    /// computation is kept and the session is no longer `Computed`.
    pub fn compute(&mut self) -> FinanzResult<&BudgetResult> {
        let split = match self.check_ready() {
            Ok(split) => split,
            Err(err) => {
                self.computed = false;
                debug!(error = %err, "budget computation rejected");
                return Err(err);
            }
        };
        let method = self.selected_method.ok_or(FinanzError::NoMethodSelected)?;

        let result = BudgetCalculator::compute(self.total_income, split);
        info!(
            profile = %self.profile,
            total = self.total_income.pesos(),
            split = %split,
            "budget computed"
        );

        self.computed = true;
        let computation = self.last_computation.insert(Computation {
            method,
            contributors: self.contributors.clone(),
            result,
        });
        Ok(&computation.result)
    }

    /// Return to the freshly created state
    pub fn reset(&mut self) {
        *self = Self::new(self.profile);
        debug!(profile = %self.profile, "session reset");
    }
}
