//! Service layer for FinanzApp
//!
//! The service layer holds the budget logic on top of the data models:
//! computation, tip sampling, session state and the controller that wires a
//! session to an input source and a presentation sink.

pub mod calculator;
pub mod controller;
pub mod session;
pub mod tips;

pub use calculator::{BudgetCalculator, ChartData};
pub use controller::BudgetController;
pub use session::{BudgetSession, Computation, SessionStage};
pub use tips::TipSelector;
