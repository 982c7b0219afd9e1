//! Terminal presentation sink
//!
//! Collects everything the core renders into a text buffer that the CLI
//! prints once the command finishes. Errors are not buffered: the CLI
//! reports them from the returned `FinanzError`.

use super::budget::{format_chart, format_result_table, format_tips, format_total};
use crate::config::Settings;
use crate::interface::PresentationSink;
use crate::models::{BudgetResult, Money, SplitValidation, Tip};

/// A [`PresentationSink`] writing formatted text
#[derive(Debug, Clone)]
pub struct TerminalSink {
    currency_symbol: String,
    chart_width: usize,
    output: String,
}

impl TerminalSink {
    pub fn new(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            chart_width: settings.chart_width,
            output: String::new(),
        }
    }

    /// Text rendered so far
    pub fn output(&self) -> &str {
        &self.output
    }

    fn push_block(&mut self, block: &str) {
        if !self.output.is_empty() && !self.output.ends_with("\n\n") {
            self.output.push('\n');
        }
        self.output.push_str(block);
        if !block.ends_with('\n') {
            self.output.push('\n');
        }
    }
}

impl PresentationSink for TerminalSink {
    fn render_total(&mut self, amount: Money) {
        let line = format_total(amount, &self.currency_symbol);
        self.push_block(&line);
    }

    fn render_result(&mut self, result: &BudgetResult) {
        let table = format_result_table(result, &self.currency_symbol);
        let chart = format_chart(result, &self.currency_symbol, self.chart_width);
        self.push_block(&table);
        self.push_block(&chart);
    }

    fn render_tips(&mut self, tips: &[Tip]) {
        if !tips.is_empty() {
            let text = format_tips(tips);
            self.push_block(&text);
        }
    }

    fn render_error(&mut self, _message: &str) {}

    fn render_validation_state(&mut self, valid: bool, total: u32) {
        let line = SplitValidation { valid, total }.message();
        self.push_block(&line);
    }
}
