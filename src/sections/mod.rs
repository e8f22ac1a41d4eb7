//! Password analysis sections
//!
//! Each section computes one finding from a password.

mod common;
mod entropy;
mod pattern;
mod strength;

pub use common::common_section;
pub use entropy::entropy_section;
pub use pattern::repeated_pattern_section;
pub use strength::{Strength, strength_section};
