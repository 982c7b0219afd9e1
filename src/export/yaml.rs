//! YAML report export
//!
//! Writes a budget report in a human-readable form with a short header.

use std::io::Write;

use super::json::BudgetReport;
use crate::error::{FinanzError, FinanzResult};

/// Write a report as YAML
pub fn export_report_yaml<W: Write>(report: &BudgetReport, writer: &mut W) -> FinanzResult<()> {
    let header = format!(
        "# FinanzApp Budget Report\n# Generated: {}\n# App Version: {}\n#\n",
        report.generated_at, report.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| FinanzError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, report).map_err(|e| FinanzError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DistributionMethod;
    use crate::services::BudgetSession;

    fn computed_individual() -> BudgetSession {
        let mut session = BudgetSession::individual();
        session.set_contributor_income(0, "2.000.000").unwrap();
        session.select_method(DistributionMethod::FiftyThirtyTwenty);
        session.compute().unwrap();
        session
    }

    #[test]
    fn test_export_yaml() {
        let session = computed_individual();
        let report = BudgetReport::from_session(&session, &[]).unwrap();

        let mut buffer = Vec::new();
        export_report_yaml(&report, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# FinanzApp Budget Report"));
        assert!(text.contains("profile: individual"));
        assert!(text.contains("50-30-20"));
        assert!(text.contains("label: Persona 1"));

        let body: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(body["total_income"].as_u64(), Some(2_000_000));
    }
}
