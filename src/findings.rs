//! Analysis findings and their text report.

use std::fmt;

use crate::sections::Strength;

/// Snapshot produced by [`crate::PasswordAnalyzer::analyze`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Findings {
    /// Masked password, never the raw value.
    pub password: String,
    pub length: usize,
    pub entropy: f64,
    pub strength: Strength,
    pub is_common: bool,
    pub has_repeats: bool,
}

impl fmt::Display for Findings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Password Analysis Report")?;
        writeln!(f, "------------------------")?;
        writeln!(f, "Password: {}", self.password)?;
        writeln!(f, "Length: {}", self.length)?;
        writeln!(f, "Entropy: {}", self.entropy)?;
        writeln!(f, "Strength: {}", self.strength)?;
        writeln!(f, "Common Password: {}", self.is_common)?;
        writeln!(f, "Repeated Patterns: {}", self.has_repeats)
    }
}
