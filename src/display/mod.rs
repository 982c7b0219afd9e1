//! Display formatting for terminal output
//!
//! Provides utilities for formatting budgets for terminal display, and the
//! [`TerminalSink`] the CLI renders through.

pub mod budget;
pub mod report;
pub mod terminal;

pub use budget::{
    format_chart, format_method_list, format_result_table, format_tips, format_total,
    format_validation,
};
pub use terminal::TerminalSink;
