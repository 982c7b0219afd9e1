//! Report export for FinanzApp
//!
//! A finished computation can be written as:
//! - JSON: machine-readable report
//! - YAML: human-readable report
//! - CSV: category breakdown for spreadsheets
//!
//! `Table` is the plain terminal rendering and is handled by `display`.

pub mod csv;
pub mod json;
pub mod yaml;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FinanzError;

pub use self::csv::export_report_csv;
pub use json::{export_report_json, BudgetReport, ContributorReport, REPORT_SCHEMA_VERSION};
pub use yaml::export_report_yaml;

/// Output format for a computed budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
    Yaml,
    Csv,
}

impl FromStr for ReportFormat {
    type Err = FinanzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            other => Err(FinanzError::Config(format!(
                "Unknown format: '{}'. Valid formats: table, json, yaml, csv",
                other
            ))),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!("yml".parse::<ReportFormat>().unwrap(), ReportFormat::Yaml);
        assert!("xml".parse::<ReportFormat>().is_err());
        assert_eq!(ReportFormat::Csv.to_string(), "csv");
    }
}
