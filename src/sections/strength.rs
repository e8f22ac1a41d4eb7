//! Strength section - five-point qualitative score.

use std::fmt;

use crate::password::Password;

const MIN_LENGTH: usize = 8;

/// Qualitative strength label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// Maps a 0-5 score to its label.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Strength::Weak,
            3..=4 => Strength::Medium,
            _ => Strength::Strong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One point each for length >= 8, lowercase, uppercase, digit, special.
pub fn score(password: &Password) -> u8 {
    [
        password.length() >= MIN_LENGTH,
        password.contains_lowercase(),
        password.contains_uppercase(),
        password.contains_digit(),
        password.contains_special(),
    ]
    .iter()
    .filter(|&&b| b)
    .count() as u8
}

pub fn strength_section(password: &Password) -> Strength {
    Strength::from_score(score(password))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pwd(raw: &str) -> Password {
        Password::new(raw).unwrap()
    }

    #[test]
    fn test_score_thresholds() {
        assert_eq!(Strength::from_score(0), Strength::Weak);
        assert_eq!(Strength::from_score(2), Strength::Weak);
        assert_eq!(Strength::from_score(3), Strength::Medium);
        assert_eq!(Strength::from_score(4), Strength::Medium);
        assert_eq!(Strength::from_score(5), Strength::Strong);
    }

    #[test]
    fn test_weak_password() {
        assert_eq!(score(&pwd("abc")), 1);
        assert_eq!(strength_section(&pwd("abc")), Strength::Weak);
        assert_eq!(strength_section(&pwd("password")), Strength::Weak);
    }

    #[test]
    fn test_medium_password() {
        assert_eq!(strength_section(&pwd("abc12345")), Strength::Medium);
        assert_eq!(strength_section(&pwd("Ab1$")), Strength::Medium);
    }

    #[test]
    fn test_strong_password() {
        assert_eq!(score(&pwd("Abc$1234")), 5);
        assert_eq!(strength_section(&pwd("Abc$1234")), Strength::Strong);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Strength::Weak.to_string(), "Weak");
        assert_eq!(Strength::Medium.to_string(), "Medium");
        assert_eq!(Strength::Strong.to_string(), "Strong");
    }
}
