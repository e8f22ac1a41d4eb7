//! Character classes used for attribute extraction, entropy and generation.
//!
//! Every class is an explicit ASCII set, so membership never depends on the
//! current locale or Unicode tables.

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
pub const SPECIAL: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A character class a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl CharClass {
    /// All classes, in policy check order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digit,
        CharClass::Special,
    ];

    /// The characters belonging to this class.
    pub fn members(self) -> &'static [u8] {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Special => SPECIAL,
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.members().contains(&(c as u8))
    }

    /// Number of distinct characters in the class.
    pub fn pool_size(self) -> usize {
        self.members().len()
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Uppercase => "uppercase letter",
            CharClass::Lowercase => "lowercase letter",
            CharClass::Digit => "digit",
            CharClass::Special => "special character",
        }
    }
}

/// Union of every class, used to fill generated passwords.
pub fn all_members() -> Vec<u8> {
    CharClass::ALL
        .iter()
        .flat_map(|class| class.members().iter().copied())
        .collect()
}
