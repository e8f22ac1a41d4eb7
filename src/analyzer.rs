//! Password analyzer - orchestrates the analysis sections.

use crate::denylist::Denylist;
use crate::findings::Findings;
use crate::password::Password;
use crate::sections::{
    Strength, common_section, entropy_section, repeated_pattern_section, strength_section,
};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

/// Delay before an async analysis runs, letting rapid edits cancel it.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Stateless analysis bound to a single password.
///
/// Every method recomputes its result from the password.
#[derive(Debug, Clone, Copy)]
pub struct PasswordAnalyzer<'a> {
    password: &'a Password,
    denylist: &'a Denylist,
}

impl<'a> PasswordAnalyzer<'a> {
    /// Binds `password` with the built-in common-password list.
    pub fn new(password: &'a Password) -> Self {
        Self::with_denylist(password, Denylist::builtin_ref())
    }

    pub fn with_denylist(password: &'a Password, denylist: &'a Denylist) -> Self {
        Self { password, denylist }
    }

    /// Entropy estimate in bits, rounded to two decimals.
    pub fn entropy(&self) -> f64 {
        entropy_section(self.password)
    }

    pub fn strength(&self) -> Strength {
        strength_section(self.password)
    }

    pub fn has_repeated_patterns(&self) -> bool {
        repeated_pattern_section(self.password)
    }

    pub fn is_common(&self) -> bool {
        common_section(self.password, self.denylist)
    }

    /// Runs every section and collects the results.
    pub fn analyze(&self) -> Findings {
        let findings = Findings {
            password: self.password.masked(),
            length: self.password.length(),
            entropy: self.entropy(),
            strength: self.strength(),
            is_common: self.is_common(),
            has_repeats: self.has_repeated_patterns(),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            length = findings.length,
            strength = %findings.strength,
            "password analyzed"
        );

        findings
    }
}

/// Async analysis that sends the findings via channel.
///
/// Waits [`DEBOUNCE`] first; if `token` is cancelled before the analysis
/// starts, nothing is sent.
#[cfg(feature = "async")]
pub async fn analyze_tx(
    password: &Password,
    token: CancellationToken,
    tx: mpsc::Sender<Findings>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("analysis cancelled");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let findings = PasswordAnalyzer::new(password).analyze();

    if let Err(e) = tx.send(findings).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password findings: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
