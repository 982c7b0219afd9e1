//! JSON report export
//!
//! A `BudgetReport` captures one finished computation (who, how, how much
//! and which tips were shown) in a serializable form shared by all formats.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{FinanzError, FinanzResult};
use crate::models::{BudgetResult, DistributionMethod, Money, Profile, Tip};
use crate::services::{BudgetSession, ChartData};

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// One contributor as shown in a report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContributorReport {
    pub label: String,
    pub income: Money,
}

/// Everything produced by a successful computation
#[derive(Debug, Clone, Serialize)]
pub struct BudgetReport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub generated_at: DateTime<Utc>,

    /// Application version that created the report
    pub app_version: String,

    pub profile: Profile,
    pub contributors: Vec<ContributorReport>,
    pub method: DistributionMethod,
    pub total_income: Money,
    pub result: BudgetResult,
    pub chart: ChartData,
    pub tips: Vec<Tip>,
}

impl BudgetReport {
    /// Build a report from a session's last computation
    ///
    /// Method and contributors are the ones the result was computed from,
    /// not whatever the session holds now.
    pub fn from_session(session: &BudgetSession, tips: &[Tip]) -> FinanzResult<Self> {
        let computation = session
            .last_computation()
            .ok_or_else(|| FinanzError::Export("No computed budget to export".into()))?;
        let result = &computation.result;

        let contributors = computation
            .contributors
            .iter()
            .enumerate()
            .map(|(i, c)| ContributorReport {
                label: c.label(i),
                income: c.income,
            })
            .collect();

        Ok(Self {
            schema_version: REPORT_SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            profile: session.profile(),
            contributors,
            method: computation.method,
            total_income: result.total_income,
            result: *result,
            chart: ChartData::from_result(result),
            tips: tips.to_vec(),
        })
    }
}

/// Write a report as JSON
pub fn export_report_json<W: Write>(
    report: &BudgetReport,
    writer: &mut W,
    pretty: bool,
) -> FinanzResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, report)
    } else {
        serde_json::to_writer(writer, report)
    }
    .map_err(|e| FinanzError::Export(e.to_string()))?;

    Ok(())
}
