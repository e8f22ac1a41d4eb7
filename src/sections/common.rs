//! Common section - checks the password against a denylist.

use crate::denylist::Denylist;
use crate::password::Password;

/// Returns `true` if the password equals a denylist entry, ignoring case.
pub fn common_section(password: &Password, denylist: &Denylist) -> bool {
    denylist.contains(password.value())
}
