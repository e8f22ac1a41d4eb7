//! Pattern section - detects immediately repeated blocks.

use crate::password::Password;

/// Returns `true` if some block of characters is directly followed by an
/// identical block (`"aa"`, `"abab"`, `"xyzxyz"`).
///
/// Repeats separated by other characters are not detected. Quadratic in the
/// password length.
pub fn repeated_pattern_section(password: &Password) -> bool {
    let chars: Vec<char> = password.value().chars().collect();
    let n = chars.len();

    for size in 1..=n / 2 {
        for start in 0..=n - 2 * size {
            if chars[start..start + size] == chars[start + size..start + 2 * size] {
                return true;
            }
        }
    }
    false
}
