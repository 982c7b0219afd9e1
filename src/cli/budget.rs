//! Budget CLI commands
//!
//! Implements the `individual` and `couple` commands: the command-line
//! arguments act as the input source, and the result is rendered either
//! through the terminal sink or as an exported report.

use clap::Args;
use tracing::{info, warn};

use crate::config::settings::Settings;
use crate::display::TerminalSink;
use crate::error::{FinanzError, FinanzResult};
use crate::export::{
    export_report_csv, export_report_json, export_report_yaml, BudgetReport, ReportFormat,
};
use crate::input::{is_valid_number, normalize_pasted, sanitize_income_input};
use crate::interface::{ContributorInput, InputSource, RawPercentages};
use crate::models::{PercentageSplit, Profile};
use crate::services::{BudgetController, TipSelector};

/// Options shared by both profiles
#[derive(Args, Debug, Clone, Default)]
pub struct BudgetOptions {
    /// Distribution method ("50-30-20", "70-20-10" or "custom")
    #[arg(short, long)]
    pub method: Option<String>,

    /// Needs percentage for the custom method
    #[arg(long)]
    pub needs: Option<String>,

    /// Wants percentage for the custom method
    #[arg(long)]
    pub wants: Option<String>,

    /// Savings percentage for the custom method
    #[arg(long)]
    pub savings: Option<String>,

    /// Output format (table, json, yaml, csv)
    #[arg(short, long)]
    pub format: Option<ReportFormat>,

    /// Seed for the tip sample
    #[arg(long)]
    pub seed: Option<u64>,

    /// Don't show tips
    #[arg(long)]
    pub no_tips: bool,
}

/// Arguments for `finanzapp individual`
#[derive(Args, Debug, Clone)]
pub struct IndividualArgs {
    /// Monthly salary (e.g. "2.000.000")
    #[arg(short, long, default_value = "")]
    pub salary: String,

    #[command(flatten)]
    pub options: BudgetOptions,
}

/// Arguments for `finanzapp couple`
#[derive(Args, Debug, Clone)]
pub struct CoupleArgs {
    /// First person's name
    #[arg(long, default_value = "")]
    pub name1: String,

    /// First person's monthly salary
    #[arg(long, default_value = "")]
    pub salary1: String,

    /// Second person's name
    #[arg(long, default_value = "")]
    pub name2: String,

    /// Second person's monthly salary
    #[arg(long, default_value = "")]
    pub salary2: String,

    #[command(flatten)]
    pub options: BudgetOptions,
}

/// Command-line arguments seen as an input source
#[derive(Debug, Clone)]
pub struct ArgsInput {
    contributors: Vec<ContributorInput>,
    method: Option<String>,
    percentages: RawPercentages,
}

impl ArgsInput {
    pub fn new(contributors: Vec<ContributorInput>, options: &BudgetOptions) -> Self {
        // Unset custom fields start from the pre-filled split
        let defaults = PercentageSplit::CUSTOM_DEFAULT;
        let field = |value: &Option<String>, default: u32| {
            value.clone().unwrap_or_else(|| default.to_string())
        };

        let contributors = contributors
            .into_iter()
            .enumerate()
            .map(|(index, fields)| {
                let raw = &fields.raw_income;
                if !raw.trim().is_empty() && !is_valid_number(raw) {
                    warn!(index, raw = %raw, "salary is not a positive number");
                }
                ContributorInput::new(fields.name, income_field_text(&fields.raw_income))
            })
            .collect();

        Self {
            contributors,
            method: options.method.clone(),
            percentages: RawPercentages::new(
                field(&options.needs, defaults.needs),
                field(&options.wants, defaults.wants),
                field(&options.savings, defaults.savings),
            ),
        }
    }
}

/// Salary text as the income field would hold it
///
/// Plain digits and separators follow the typing rule; anything else (a
/// currency symbol, spaces) is treated as pasted text.
fn income_field_text(raw: &str) -> String {
    let typed = raw
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == ',');
    if typed {
        sanitize_income_input(raw)
    } else {
        normalize_pasted(raw).unwrap_or_default()
    }
}

impl InputSource for ArgsInput {
    fn contributor_input(&self, index: usize) -> ContributorInput {
        self.contributors.get(index).cloned().unwrap_or_default()
    }

    fn selected_method_id(&self) -> Option<String> {
        self.method
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(String::from)
    }

    fn custom_percentages(&self) -> RawPercentages {
        self.percentages.clone()
    }
}

/// Compute a budget and render it in the requested format
pub fn render_budget(
    profile: Profile,
    contributors: Vec<ContributorInput>,
    options: &BudgetOptions,
    settings: &Settings,
) -> FinanzResult<String> {
    let input = ArgsInput::new(contributors, options);
    let selector = match options.seed {
        Some(seed) => TipSelector::with_seed(seed),
        None => TipSelector::new(),
    };
    let tip_count = if options.no_tips {
        0
    } else {
        settings.tip_count(profile)
    };

    let mut controller =
        BudgetController::with_selector(profile, selector).with_tip_count(tip_count);
    let mut sink = TerminalSink::new(settings);
    controller.calculate(&input, &mut sink)?;

    let format = options.format.unwrap_or(settings.default_format);
    info!(%profile, %format, "rendering budget");

    if format == ReportFormat::Table {
        return Ok(sink.output().to_string());
    }

    let report = BudgetReport::from_session(controller.session(), controller.last_tips())?;
    let mut buffer = Vec::new();
    match format {
        ReportFormat::Json => export_report_json(&report, &mut buffer, true)?,
        ReportFormat::Yaml => export_report_yaml(&report, &mut buffer)?,
        ReportFormat::Csv => export_report_csv(&report, &mut buffer)?,
        ReportFormat::Table => {}
    }

    String::from_utf8(buffer).map_err(|e| FinanzError::Export(e.to_string()))
}

/// Handle `finanzapp individual`
pub fn handle_individual_command(args: IndividualArgs, settings: &Settings) -> FinanzResult<()> {
    let contributors = vec![ContributorInput::new("", args.salary)];
    let output = render_budget(Profile::Individual, contributors, &args.options, settings)?;
    print!("{}", output);
    Ok(())
}

/// Handle `finanzapp couple`
pub fn handle_couple_command(args: CoupleArgs, settings: &Settings) -> FinanzResult<()> {
    let contributors = vec![
        ContributorInput::new(args.name1, args.salary1),
        ContributorInput::new(args.name2, args.salary2),
    ];
    let output = render_budget(Profile::Couple, contributors, &args.options, settings)?;
    print!("{}", output);
    Ok(())
}
