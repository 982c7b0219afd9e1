//! Income contributors
//!
//! One contributor in individual mode, two in couple mode.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// One income-earning party in the session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub name: String,
    pub income: Money,
}

impl Contributor {
    pub fn new(name: impl Into<String>, income: Money) -> Self {
        Self {
            name: name.into(),
            income,
        }
    }

    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Label for UI headings; falls back to "Persona N" (1-based)
    pub fn label(&self, index: usize) -> String {
        let name = self.name.trim();
        if name.is_empty() {
            format!("Persona {}", index + 1)
        } else {
            name.to_string()
        }
    }
}
