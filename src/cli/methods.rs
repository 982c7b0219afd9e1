//! Method registry CLI commands
//!
//! `methods` lists the distribution methods; `validate` gives the live
//! feedback for a custom split.

use crate::display::{format_method_list, format_validation};
use crate::error::{FinanzError, FinanzResult};
use crate::models::PercentageSplit;

/// Handle `finanzapp methods`
pub fn handle_methods_command() -> FinanzResult<()> {
    println!("{}", format_method_list());
    Ok(())
}

/// Handle `finanzapp validate`
///
/// Prints the feedback line and fails when the split does not sum to 100.
pub fn handle_validate_command(needs: &str, wants: &str, savings: &str) -> FinanzResult<()> {
    let validation = PercentageSplit::from_raw(needs, wants, savings).validate();
    println!("{}", format_validation(&validation));

    if validation.valid {
        Ok(())
    } else {
        Err(FinanzError::invalid_distribution(validation.total))
    }
}
