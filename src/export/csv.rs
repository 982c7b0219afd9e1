//! CSV report export
//!
//! One row per spend category, spreadsheet-compatible.

use std::io::Write;

use super::json::BudgetReport;
use crate::error::{FinanzError, FinanzResult};

/// Write the category breakdown of a report as CSV
pub fn export_report_csv<W: Write>(report: &BudgetReport, writer: W) -> FinanzResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Category", "Percentage", "Amount", "Share of Total"])
        .map_err(|e| FinanzError::Export(e.to_string()))?;

    for (index, (category, allocation)) in report.result.iter().enumerate() {
        let share = report.chart.share_of_total(index).unwrap_or(0.0);
        csv_writer
            .write_record([
                category.label().to_string(),
                allocation.percentage.to_string(),
                format!("{:.2}", allocation.amount),
                format!("{:.1}", share),
            ])
            .map_err(|e| FinanzError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| FinanzError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DistributionMethod;
    use crate::services::BudgetSession;

    #[test]
    fn test_export_csv() {
        let mut session = BudgetSession::individual();
        session.set_contributor_income(0, "1.001").unwrap();
        session.select_method(DistributionMethod::FiftyThirtyTwenty);
        session.compute().unwrap();
        let report = BudgetReport::from_session(&session, &[]).unwrap();

        let mut buffer = Vec::new();
        export_report_csv(&report, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "Category,Percentage,Amount,Share of Total");
        assert_eq!(lines[1], "Gastos Necesarios,50,500.50,50.0");
        assert_eq!(lines[2], "Gastos Deseos,30,300.30,30.0");
        assert_eq!(lines.len(), 4);
    }
}
