//! Password strength analysis and generation library
//!
//! This library extracts character-class attributes from passwords, scores
//! their strength and entropy, detects common passwords and repeated blocks,
//! validates them against a policy and generates policy-compliant random
//! passwords.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async analysis with cancellation
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Derives `Serialize` for analysis findings
//!
//! # Environment Variables
//!
//! - `PWD_DENYLIST_PATH`: Custom path to an extended common-password list
//!   used by [`Denylist::from_env`] (default: `./assets/denylist.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_forge::{Password, PasswordAnalyzer, PasswordGenerator, PasswordPolicy};
//!
//! let password = Password::new("Abc$1234")?;
//! let policy = PasswordPolicy::with_min_length(8)?;
//! assert!(policy.validate(&password));
//!
//! let findings = PasswordAnalyzer::new(&password).analyze();
//! println!("{}", findings);
//!
//! let generated = PasswordGenerator::new(&policy).generate(12)?;
//! assert_eq!(generated.length(), 12);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Internal modules
mod analyzer;
mod denylist;
mod findings;
mod generator;
mod password;
mod policy;
mod sections;

pub mod charset;

// Public API
pub use analyzer::PasswordAnalyzer;
pub use charset::CharClass;
pub use denylist::{BUILTIN_COMMON, DENYLIST_PATH_ENV, Denylist, DenylistError, denylist_path};
pub use findings::Findings;
pub use generator::{DEFAULT_LENGTH, GeneratorError, MAX_ATTEMPTS, PasswordGenerator};
pub use password::{MASK_CHAR, Password, PasswordError};
pub use policy::{PasswordPolicy, PolicyError, Violation};
pub use sections::Strength;

#[cfg(feature = "async")]
pub use analyzer::{DEBOUNCE, analyze_tx};
