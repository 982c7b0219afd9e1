//! Budget display formatting
//!
//! Formats computed budgets, the chart, tips and method listings for
//! terminal output.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::{format_bar, format_share, left_align, separator};
use crate::models::money::format_currency_with_symbol;
use crate::models::{BudgetResult, Money, SplitValidation, Tip, PRESETS};
use crate::services::ChartData;

/// One row of the result table
#[derive(Tabled)]
struct AllocationRow {
    #[tabled(rename = "Categoría")]
    category: &'static str,
    #[tabled(rename = "%")]
    percentage: String,
    #[tabled(rename = "Monto")]
    amount: String,
}

/// One row of the method listing
#[derive(Tabled)]
struct MethodRow {
    #[tabled(rename = "ID")]
    id: &'static str,
    #[tabled(rename = "Método")]
    name: &'static str,
    #[tabled(rename = "Necesidades")]
    needs: String,
    #[tabled(rename = "Deseos")]
    wants: String,
    #[tabled(rename = "Ahorro")]
    savings: String,
}

/// Format the combined income line
pub fn format_total(total: Money, symbol: &str) -> String {
    format!(
        "Ingreso total: {}",
        format_currency_with_symbol(total.as_f64(), symbol)
    )
}

/// Format a computed budget as a table
pub fn format_result_table(result: &BudgetResult, symbol: &str) -> String {
    let rows: Vec<AllocationRow> = result
        .iter()
        .map(|(category, allocation)| AllocationRow {
            category: category.label(),
            percentage: format!("{}%", allocation.percentage),
            amount: format_currency_with_symbol(allocation.amount, symbol),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format the category breakdown as horizontal bars
pub fn format_chart(result: &BudgetResult, symbol: &str, width: usize) -> String {
    let chart = ChartData::from_result(result);
    let label_width = chart
        .labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for (index, (label, value)) in chart.labels.iter().zip(&chart.values).enumerate() {
        let share = chart.share_of_total(index).unwrap_or(0.0);
        output.push_str(&format!(
            "{}  {}  {:>6}  {}\n",
            left_align(label, label_width),
            format_bar(*value, chart.total, width),
            format_share(share),
            format_currency_with_symbol(*value, symbol),
        ));
    }
    output
}

/// Format a list of tips
pub fn format_tips(tips: &[Tip]) -> String {
    if tips.is_empty() {
        return String::new();
    }

    let mut output = String::from("Consejos financieros\n");
    output.push_str(&separator(20));
    output.push('\n');
    for (i, tip) in tips.iter().enumerate() {
        output.push_str(&format!("{}. {}\n   {}\n", i + 1, tip.title, tip.description));
    }
    output
}

/// Format the available distribution methods
pub fn format_method_list() -> String {
    let mut rows: Vec<MethodRow> = PRESETS
        .iter()
        .map(|p| MethodRow {
            id: p.id,
            name: p.name,
            needs: format!("{}%", p.split.needs),
            wants: format!("{}%", p.split.wants),
            savings: format!("{}%", p.split.savings),
        })
        .collect();

    rows.push(MethodRow {
        id: crate::models::method::CUSTOM_ID,
        name: "Personalizado",
        needs: "-".into(),
        wants: "-".into(),
        savings: "-".into(),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format custom-split feedback
pub fn format_validation(validation: &SplitValidation) -> String {
    validation.message()
}
