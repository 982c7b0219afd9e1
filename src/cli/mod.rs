//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod methods;
pub mod tips;

pub use budget::{
    handle_couple_command, handle_individual_command, ArgsInput, BudgetOptions, CoupleArgs,
    IndividualArgs,
};
pub use methods::{handle_methods_command, handle_validate_command};
pub use tips::{handle_tips_command, TipsArgs};
