//! Policy-constrained random password generation.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::charset::{self, CharClass};
use crate::password::Password;
use crate::policy::PasswordPolicy;

/// Length used by [`PasswordGenerator::generate_default`].
pub const DEFAULT_LENGTH: usize = 12;

/// Candidates tried before giving up.
pub const MAX_ATTEMPTS: usize = 64;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Requested password length {requested} is below policy minimum {minimum}")]
    LengthBelowMinimum { requested: usize, minimum: usize },
    #[error("Requested password length {requested} cannot hold one character from each of {required} classes")]
    LengthBelowClassCount { requested: usize, required: usize },
    #[error("No policy-compliant password after {attempts} attempts")]
    Exhausted { attempts: usize },
}

/// Random password generator bound to a policy.
///
/// The generator owns its random source; nothing is shared between
/// instances.
pub struct PasswordGenerator<R = StdRng> {
    policy: PasswordPolicy,
    rng: R,
}

impl PasswordGenerator<StdRng> {
    /// Generator with a freshly OS-seeded RNG.
    pub fn new(policy: &PasswordPolicy) -> Self {
        Self::with_rng(policy, StdRng::from_entropy())
    }
}

impl<R: Rng> PasswordGenerator<R> {
    pub fn with_rng(policy: &PasswordPolicy, rng: R) -> Self {
        Self {
            policy: *policy,
            rng,
        }
    }

    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    /// Generates a password of [`DEFAULT_LENGTH`] characters.
    pub fn generate_default(&mut self) -> Result<Password, GeneratorError> {
        self.generate(DEFAULT_LENGTH)
    }

    /// Generates a password of exactly `length` characters that satisfies
    /// the bound policy.
    ///
    /// Each candidate starts with one character from every class, is filled
    /// from the union of all classes, then shuffled.
    ///
    /// # Errors
    ///
    /// - `LengthBelowMinimum` if `length` is below the policy minimum
    /// - `LengthBelowClassCount` if `length` cannot hold one character per class
    /// - `Exhausted` if no candidate validated within [`MAX_ATTEMPTS`]
    pub fn generate(&mut self, length: usize) -> Result<Password, GeneratorError> {
        if length < self.policy.min_length() {
            return Err(GeneratorError::LengthBelowMinimum {
                requested: length,
                minimum: self.policy.min_length(),
            });
        }
        let required = CharClass::ALL.len();
        if length < required {
            return Err(GeneratorError::LengthBelowClassCount {
                requested: length,
                required,
            });
        }

        let pool = charset::all_members();
        for attempt in 1..=MAX_ATTEMPTS {
            let password = self.candidate(length, &pool);
            if self.policy.validate(&password) {
                return Ok(password);
            }

            #[cfg(feature = "tracing")]
            tracing::debug!(attempt, length, "generated candidate rejected by policy");
            #[cfg(not(feature = "tracing"))]
            let _ = attempt;
        }

        #[cfg(feature = "tracing")]
        tracing::warn!(attempts = MAX_ATTEMPTS, length, "password generation exhausted");

        Err(GeneratorError::Exhausted {
            attempts: MAX_ATTEMPTS,
        })
    }

    fn candidate(&mut self, length: usize, pool: &[u8]) -> Password {
        let mut chars: Vec<u8> = Vec::with_capacity(length);
        for class in CharClass::ALL {
            chars.push(pick(&mut self.rng, class.members()));
        }
        while chars.len() < length {
            chars.push(pick(&mut self.rng, pool));
        }
        chars.shuffle(&mut self.rng);

        Password::from_nonempty(chars.into_iter().map(char::from).collect())
    }
}

fn pick<R: Rng>(rng: &mut R, set: &[u8]) -> u8 {
    set[rng.gen_range(0..set.len())]
}
