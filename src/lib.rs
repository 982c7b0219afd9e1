//! FinanzApp - Personal and couple budget calculator
//!
//! This library provides the core of FinanzApp: it splits a monthly income
//! into needs, wants and savings according to a distribution method, for
//! one person or for a couple combining their incomes, and picks a few
//! financial tips to show with the result.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `input`: Lenient parsing of typed amounts and percentages
//! - `models`: Core data models (money, splits, methods, results, tips)
//! - `services`: Calculator, tip selector, session and controller
//! - `interface`: Input source and presentation sink traits
//! - `display`: Terminal formatting
//! - `export`: JSON, YAML and CSV reports
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use finanzapp::models::DistributionMethod;
//! use finanzapp::services::BudgetSession;
//!
//! let mut session = BudgetSession::individual();
//! session.set_contributor_income(0, "2.000.000")?;
//! session.select_method(DistributionMethod::FiftyThirtyTwenty);
//! let result = session.compute()?;
//! assert_eq!(result.savings.amount, 400_000.0);
//! # Ok::<(), finanzapp::FinanzError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod input;
pub mod interface;
pub mod models;
pub mod services;

pub use error::FinanzError;
