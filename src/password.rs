//! Password value holder and derived character-class attributes.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::charset::CharClass;

/// Character used to replace every position of the masked form.
pub const MASK_CHAR: char = '*';

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password must be text")]
    NotText,
    #[error("Password cannot be empty")]
    Empty,
}

/// An immutable, non-empty credential.
///
/// The raw value is held in a [`SecretString`]; neither `Debug` nor `Display`
/// reveal it. Use [`Password::value`] when the plain text is really needed.
pub struct Password {
    secret: SecretString,
    length: usize,
}

impl Password {
    /// Wraps `value`, rejecting the empty string.
    pub fn new(value: &str) -> Result<Self, PasswordError> {
        if value.is_empty() {
            return Err(PasswordError::Empty);
        }
        Ok(Self {
            length: value.chars().count(),
            secret: SecretString::new(value.into()),
        })
    }

    /// Wraps a value already known to be non-empty.
    pub(crate) fn from_nonempty(value: String) -> Self {
        debug_assert!(!value.is_empty());
        Self {
            length: value.chars().count(),
            secret: SecretString::new(value.into_boxed_str()),
        }
    }

    /// Wraps raw bytes, which must be valid UTF-8 text.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PasswordError> {
        let value = std::str::from_utf8(bytes).map_err(|_| PasswordError::NotText)?;
        Self::new(value)
    }

    pub fn value(&self) -> &str {
        self.secret.expose_secret()
    }

    pub fn as_secret(&self) -> &SecretString {
        &self.secret
    }

    /// Length in characters, not bytes.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Display-safe form: one [`MASK_CHAR`] per character.
    pub fn masked(&self) -> String {
        std::iter::repeat_n(MASK_CHAR, self.length).collect()
    }

    pub fn contains(&self, class: CharClass) -> bool {
        self.value().chars().any(|c| class.contains(c))
    }

    pub fn contains_uppercase(&self) -> bool {
        self.contains(CharClass::Uppercase)
    }

    pub fn contains_lowercase(&self) -> bool {
        self.contains(CharClass::Lowercase)
    }

    pub fn contains_digit(&self) -> bool {
        self.contains(CharClass::Digit)
    }

    pub fn contains_special(&self) -> bool {
        self.contains(CharClass::Special)
    }
}

impl TryFrom<&str> for Password {
    type Error = PasswordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Password {
    type Error = PasswordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl TryFrom<Vec<u8>> for Password {
    type Error = PasswordError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_bytes(&value)
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Password")
            .field("masked", &self.masked())
            .field("length", &self.length)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_rejected() {
        assert_eq!(Password::new("").unwrap_err(), PasswordError::Empty);
        assert_eq!(
            Password::try_from(String::new()).unwrap_err(),
            PasswordError::Empty
        );
    }

    #[test]
    fn test_non_text_rejected() {
        let result = Password::from_bytes(&[0xff, 0xfe, 0x31]);
        assert_eq!(result.unwrap_err(), PasswordError::NotText);

        let result = Password::try_from(vec![0xc3, 0x28]);
        assert_eq!(result.unwrap_err(), PasswordError::NotText);
    }

    #[test]
    fn test_bytes_accepted_when_utf8() {
        let pwd = Password::try_from(b"Abc$1234".to_vec()).unwrap();
        assert_eq!(pwd.value(), "Abc$1234");
    }

    #[test]
    fn test_masked_matches_length() {
        for raw in ["a", "Abc$1234", "pässwörd", "  \t", "🔑🔑🔑"] {
            let pwd = Password::new(raw).unwrap();
            let masked = pwd.masked();
            assert_eq!(masked.chars().count(), raw.chars().count());
            assert!(masked.chars().all(|c| c == MASK_CHAR));
        }
    }

    #[test]
    fn test_length_counts_chars() {
        let pwd = Password::new("héllo").unwrap();
        assert_eq!(pwd.length(), 5);
    }

    #[test]
    fn test_character_classes() {
        let pwd = Password::new("Abc$1234").unwrap();
        assert!(pwd.contains_uppercase());
        assert!(pwd.contains_lowercase());
        assert!(pwd.contains_digit());
        assert!(pwd.contains_special());

        let pwd = Password::new("abc12345").unwrap();
        assert!(!pwd.contains_uppercase());
        assert!(pwd.contains_lowercase());
        assert!(pwd.contains_digit());
        assert!(!pwd.contains_special());
    }

    #[test]
    fn test_whitespace_is_not_special() {
        let pwd = Password::new("with space").unwrap();
        assert!(!pwd.contains_special());
    }

    #[test]
    fn test_formatting_never_reveals_value() {
        let pwd = Password::new("hunter2").unwrap();
        assert_eq!(pwd.to_string(), "*******");
        let debug = format!("{:?}", pwd);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("length: 7"));
    }
}
