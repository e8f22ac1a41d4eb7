//! Password policy: minimum length and required character classes.

use std::fmt;

use thiserror::Error;

use crate::charset::CharClass;
use crate::password::Password;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Minimum length must be at least 1")]
    ZeroMinLength,
}

/// A single unmet policy requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    TooShort { min_length: usize },
    Missing(CharClass),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::TooShort { min_length } => {
                write!(f, "must be at least {} characters", min_length)
            }
            Violation::Missing(class) => write!(f, "missing {}", class.name()),
        }
    }
}

/// Immutable set of requirements a password must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    min_length: usize,
    require_upper: bool,
    require_lower: bool,
    require_digit: bool,
    require_special: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_upper: true,
            require_lower: true,
            require_digit: true,
            require_special: true,
        }
    }
}

impl PasswordPolicy {
    pub fn new(
        min_length: usize,
        require_upper: bool,
        require_lower: bool,
        require_digit: bool,
        require_special: bool,
    ) -> Result<Self, PolicyError> {
        if min_length == 0 {
            return Err(PolicyError::ZeroMinLength);
        }
        Ok(Self {
            min_length,
            require_upper,
            require_lower,
            require_digit,
            require_special,
        })
    }

    /// Policy requiring every character class with a custom minimum length.
    pub fn with_min_length(min_length: usize) -> Result<Self, PolicyError> {
        Self::new(min_length, true, true, true, true)
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn requires(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.require_upper,
            CharClass::Lowercase => self.require_lower,
            CharClass::Digit => self.require_digit,
            CharClass::Special => self.require_special,
        }
    }

    /// Returns `true` if the password meets every enabled requirement.
    ///
    /// Checks run in order length, uppercase, lowercase, digit, special and
    /// stop at the first failure.
    pub fn validate(&self, password: &Password) -> bool {
        if password.length() < self.min_length {
            return false;
        }
        CharClass::ALL
            .iter()
            .all(|&class| !self.requires(class) || password.contains(class))
    }

    /// Lists every unmet requirement, in check order.
    pub fn violations(&self, password: &Password) -> Vec<Violation> {
        let mut violations = Vec::new();
        if password.length() < self.min_length {
            violations.push(Violation::TooShort {
                min_length: self.min_length,
            });
        }
        violations.extend(
            CharClass::ALL
                .iter()
                .filter(|&&class| self.requires(class) && !password.contains(class))
                .map(|&class| Violation::Missing(class)),
        );
        violations
    }
}

impl fmt::Display for PasswordPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PasswordPolicy(min_length={})", self.min_length)
    }
}
