use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use finanzapp::cli::{
    handle_couple_command, handle_individual_command, handle_methods_command,
    handle_tips_command, handle_validate_command, CoupleArgs, IndividualArgs, TipsArgs,
};
use finanzapp::config::{paths::FinanzPaths, settings::Settings};

/// Environment variable holding the log filter
const LOG_ENV: &str = "FINANZAPP_LOG";

#[derive(Parser)]
#[command(
    name = "finanzapp",
    author = "FinanzApp Colombia",
    version,
    about = "Personal and couple budget calculator",
    long_about = "FinanzApp splits a monthly income into needs, wants and savings \
                  using the 50/30/20 rule, the 70/20/10 rule or your own split, \
                  for one person or for a couple sharing their incomes."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Budget for one person
    #[command(alias = "personal")]
    Individual(IndividualArgs),

    /// Budget for a couple with combined incomes
    #[command(alias = "pareja")]
    Couple(CoupleArgs),

    /// List the distribution methods
    Methods,

    /// Check that custom percentages sum to 100
    Validate {
        /// Needs percentage
        #[arg(allow_hyphen_values = true)]
        needs: String,
        /// Wants percentage
        #[arg(allow_hyphen_values = true)]
        wants: String,
        /// Savings percentage
        #[arg(allow_hyphen_values = true)]
        savings: String,
    },

    /// Show a sample of financial tips
    Tips(TipsArgs),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FinanzPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Individual(args)) => handle_individual_command(args, &settings)?,
        Some(Commands::Couple(args)) => handle_couple_command(args, &settings)?,
        Some(Commands::Methods) => handle_methods_command()?,
        Some(Commands::Validate {
            needs,
            wants,
            savings,
        }) => handle_validate_command(&needs, &wants, &savings)?,
        Some(Commands::Tips(args)) => handle_tips_command(args, &settings)?,
        Some(Commands::Init) => {
            println!("Initializing FinanzApp at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("FinanzApp Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!(
                "Settings file:    {}{}",
                paths.settings_file().display(),
                if paths.is_initialized() {
                    ""
                } else {
                    " (not created, using defaults)"
                }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  Individual tip count: {}", settings.individual_tip_count);
            println!("  Couple tip count:     {}", settings.couple_tip_count);
            println!("  Chart width:          {}", settings.chart_width);
            println!("  Default format:       {}", settings.default_format);
        }
        None => {
            println!("FinanzApp - Personal and couple budget calculator");
            println!();
            println!("Run 'finanzapp --help' for usage information.");
            println!("Run 'finanzapp methods' to see the distribution methods.");
        }
    }

    Ok(())
}
