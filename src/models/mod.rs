//! Core data models for FinanzApp
//!
//! This module contains the data structures of the budget domain: money,
//! contributors, percentage splits, distribution methods, computed results
//! and the tip catalogs.

pub mod budget;
pub mod contributor;
pub mod method;
pub mod money;
pub mod split;
pub mod tip;

pub use budget::{BudgetResult, CategoryAllocation, SpendCategory};
pub use contributor::Contributor;
pub use method::{DistributionMethod, Preset, PRESETS};
pub use money::Money;
pub use split::{PercentageSplit, SplitValidation};
pub use tip::{Profile, Tip, TipCategory};
