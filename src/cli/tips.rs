//! Tip CLI command

use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_tips;
use crate::error::FinanzResult;
use crate::models::{Profile, Tip};
use crate::services::TipSelector;

/// Arguments for `finanzapp tips`
#[derive(Args, Debug, Clone, Default)]
pub struct TipsArgs {
    /// Catalog to sample from (individual or couple)
    #[arg(short, long, default_value = "individual")]
    pub profile: Profile,

    /// Number of tips (defaults to the configured count for the profile)
    #[arg(short, long)]
    pub count: Option<usize>,

    /// Seed for the sample
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Draw the tips requested by `args`
pub fn sample_tips(args: &TipsArgs, settings: &Settings) -> Vec<Tip> {
    let count = args.count.unwrap_or_else(|| settings.tip_count(args.profile));
    let mut selector = match args.seed {
        Some(seed) => TipSelector::with_seed(seed),
        None => TipSelector::new(),
    };
    selector.sample_for(args.profile, count)
}

/// Handle `finanzapp tips`
pub fn handle_tips_command(args: TipsArgs, settings: &Settings) -> FinanzResult<()> {
    let tips = sample_tips(&args, settings);
    print!("{}", format_tips(&tips));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_counts_follow_settings() {
        let settings = Settings::default();

        let args = TipsArgs {
            seed: Some(1),
            ..TipsArgs::default()
        };
        assert_eq!(sample_tips(&args, &settings).len(), 4);

        let args = TipsArgs {
            profile: Profile::Couple,
            seed: Some(1),
            ..TipsArgs::default()
        };
        assert_eq!(sample_tips(&args, &settings).len(), 6);
    }

    #[test]
    fn test_count_is_clamped_to_catalog() {
        let args = TipsArgs {
            count: Some(50),
            seed: Some(3),
            ..TipsArgs::default()
        };
        assert_eq!(sample_tips(&args, &Settings::default()).len(), 10);
    }

    #[test]
    fn test_same_seed_same_sample() {
        let args = TipsArgs {
            profile: Profile::Couple,
            count: Some(3),
            seed: Some(99),
        };
        let settings = Settings::default();
        assert_eq!(sample_tips(&args, &settings), sample_tips(&args, &settings));
    }
}
