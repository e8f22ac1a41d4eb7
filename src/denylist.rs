//! Common-password denylist.
//!
//! A small list of well-known weak passwords is built in. Larger lists can be
//! loaded from a newline-delimited file and merged with it.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use thiserror::Error;

/// Passwords every denylist contains.
pub const BUILTIN_COMMON: &[&str] = &["password", "123456", "qwerty", "abc123"];

/// Environment variable naming the denylist file.
pub const DENYLIST_PATH_ENV: &str = "PWD_DENYLIST_PATH";

const DEFAULT_DENYLIST_PATH: &str = "./assets/denylist.txt";

static BUILTIN: LazyLock<Denylist> = LazyLock::new(Denylist::builtin);

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
}

/// Case-insensitive set of common passwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylist {
    entries: HashSet<String>,
}

impl Default for Denylist {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Denylist {
    /// The built-in list only.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_COMMON.iter().map(|p| p.to_lowercase()).collect(),
        }
    }

    /// Shared instance of the built-in list.
    pub fn builtin_ref() -> &'static Denylist {
        &BUILTIN
    }

    /// Loads the file at `path` and merges it with the built-in entries.
    ///
    /// Lines are trimmed and lower-cased; blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File holds no entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DenylistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: file not found {:?}", path);
            return Err(DenylistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: empty file {:?}", path);
            return Err(DenylistError::EmptyFile);
        }

        let mut denylist = Self::builtin();
        denylist.extend(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!("Denylist loaded: {} entries from {:?}", denylist.len(), path);

        Ok(denylist)
    }

    /// Loads the file named by [`DENYLIST_PATH_ENV`], falling back to
    /// `./assets/denylist.txt`.
    pub fn from_env() -> Result<Self, DenylistError> {
        Self::from_path(denylist_path())
    }

    /// Adds entries, normalised the same way as file lines.
    pub fn extend<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.entries.extend(
            entries
                .into_iter()
                .map(|e| e.as_ref().trim().to_lowercase())
                .filter(|e| !e.is_empty()),
        );
    }

    /// Exact, case-insensitive membership.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns the denylist file path.
///
/// Priority:
/// 1. Environment variable `PWD_DENYLIST_PATH`
/// 2. Default path `./assets/denylist.txt`
pub fn denylist_path() -> PathBuf {
    std::env::var(DENYLIST_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DENYLIST_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn set_env(key: &str, value: &str) {
        // SAFETY: env-touching tests are serialized
        unsafe { std::env::set_var(key, value); }
    }

    fn remove_env(key: &str) {
        // SAFETY: env-touching tests are serialized
        unsafe { std::env::remove_var(key); }
    }

    fn setup_with_tempfile(passwords: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for pwd in passwords {
            writeln!(temp_file, "{}", pwd).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    fn test_builtin_entries() {
        let denylist = Denylist::builtin();
        assert_eq!(denylist.len(), 4);
        assert!(denylist.contains("password"));
        assert!(denylist.contains("PassWord"));
        assert!(denylist.contains("ABC123"));
        assert!(!denylist.contains("password1"));
        assert!(!denylist.contains("Tr0ub4dor&3"));
        assert_eq!(Denylist::builtin_ref(), &denylist);
    }

    #[test]
    fn test_from_path_merges_with_builtin() {
        let temp_file = setup_with_tempfile(&["  Letmein  ", "", "dragon", "qwerty"]);
        let denylist = Denylist::from_path(temp_file.path()).unwrap();

        assert_eq!(denylist.len(), 6);
        assert!(denylist.contains("letmein"));
        assert!(denylist.contains("DRAGON"));
        assert!(denylist.contains("123456"));
    }

    #[test]
    fn test_from_path_file_not_found() {
        let result = Denylist::from_path("/nonexistent/path/denylist.txt");
        assert!(matches!(result, Err(DenylistError::FileNotFound(_))));
    }

    #[test]
    fn test_from_path_empty_file() {
        let temp_file = setup_with_tempfile(&["", "   "]);
        let result = Denylist::from_path(temp_file.path());
        assert!(matches!(result, Err(DenylistError::EmptyFile)));
    }

    #[test]
    #[serial]
    fn test_denylist_path_default() {
        remove_env(DENYLIST_PATH_ENV);
        assert_eq!(denylist_path(), PathBuf::from("./assets/denylist.txt"));
    }

    #[test]
    #[serial]
    fn test_from_env() {
        let temp_file = setup_with_tempfile(&["monkey"]);
        set_env(DENYLIST_PATH_ENV, temp_file.path().to_str().unwrap());

        assert_eq!(denylist_path(), temp_file.path());
        let denylist = Denylist::from_env().unwrap();
        assert!(denylist.contains("Monkey"));

        remove_env(DENYLIST_PATH_ENV);
    }
}
