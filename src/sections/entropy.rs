//! Entropy section - pool-size based entropy estimate.

use crate::charset::CharClass;
use crate::password::Password;

/// Sum of the class sizes observed in the password.
pub fn pool_size(password: &Password) -> usize {
    CharClass::ALL
        .iter()
        .filter(|&&class| password.contains(class))
        .map(|class| class.pool_size())
        .sum()
}

/// Estimates entropy in bits as `length * log2(pool_size)`, rounded to two
/// decimals. A password with no recognised class scores `0.0`.
pub fn entropy_section(password: &Password) -> f64 {
    let pool = pool_size(password);
    if pool == 0 {
        return 0.0;
    }
    let bits = password.length() as f64 * (pool as f64).log2();
    (bits * 100.0).round() / 100.0
}
