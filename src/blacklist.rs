//! Blacklist management module
//!
//! Handles loading and querying the common password list used by the
//! heuristic estimator.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable pointing at a custom blacklist file.
pub const BLACKLIST_PATH_ENV: &str = "PWD_FORGE_BLACKLIST_PATH";

const EMBEDDED_BLACKLIST: &str = include_str!("../assets/common-passwords.txt");

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Set of common passwords, stored lowercase.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    entries: HashSet<String>,
}

/// Returns the custom blacklist path from `PWD_FORGE_BLACKLIST_PATH`, if set.
pub fn get_blacklist_path() -> Option<PathBuf> {
    std::env::var(BLACKLIST_PATH_ENV)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
}

impl Blacklist {
    /// The list compiled into the binary.
    pub fn embedded() -> Self {
        Self::parse(EMBEDDED_BLACKLIST)
    }

    /// Loads the blacklist.
    ///
    /// Priority:
    /// 1. File named by `PWD_FORGE_BLACKLIST_PATH`
    /// 2. The embedded list
    ///
    /// # Errors
    ///
    /// Returns error if the environment names a file that does not exist,
    /// cannot be read, or is empty.
    pub fn load() -> Result<Self, BlacklistError> {
        match get_blacklist_path() {
            Some(path) => Self::from_path(path),
            None => Ok(Self::embedded()),
        }
    }

    /// Loads the blacklist from a specific file, one password per line.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist initialization FAILED: FileNotFound {}", path.display());
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist initialization FAILED: Empty file {}", path.display());
            return Err(BlacklistError::EmptyFile);
        }

        let blacklist = Self::parse(&content);

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Blacklist initialized: {} passwords from {:?}",
            blacklist.len(),
            path
        );

        Ok(blacklist)
    }

    fn parse(content: &str) -> Self {
        let entries = content
            .lines()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();
        Self { entries }
    }

    /// Checks if a password is in the blacklist (case-insensitive).
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    /// Iterates over the (lowercase) entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: env-dependent tests run under #[serial]
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: env-dependent tests run under #[serial]
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    #[serial]
    fn test_get_blacklist_path_default() {
        remove_env(BLACKLIST_PATH_ENV);

        assert_eq!(get_blacklist_path(), None);
    }

    #[test]
    #[serial]
    fn test_get_blacklist_path_from_env() {
        let custom_path = "/custom/path/blacklist.txt";
        set_env(BLACKLIST_PATH_ENV, custom_path);

        assert_eq!(get_blacklist_path(), Some(PathBuf::from(custom_path)));

        remove_env(BLACKLIST_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_load_falls_back_to_embedded() {
        remove_env(BLACKLIST_PATH_ENV);

        let blacklist = Blacklist::load().unwrap();
        assert_eq!(blacklist.len(), Blacklist::embedded().len());
        assert!(blacklist.contains("password"));
    }

    #[test]
    #[serial]
    fn test_load_file_not_found() {
        set_env(BLACKLIST_PATH_ENV, "/nonexistent/path/blacklist.txt");

        let result = Blacklist::load();
        match result {
            Err(BlacklistError::FileNotFound(_)) => {}
            _ => panic!("Expected FileNotFound error"),
        }

        remove_env(BLACKLIST_PATH_ENV);
    }

    #[test]
    fn test_from_path_empty_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "  \n").expect("Failed to write empty content");

        let result = Blacklist::from_path(temp_file.path());
        assert!(matches!(result, Err(BlacklistError::EmptyFile)));
    }

    #[test]
    fn test_from_path_success() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "password123").expect("Failed to write");
        writeln!(temp_file, "qwerty").expect("Failed to write");
        writeln!(temp_file, "QWERTY").expect("Failed to write");

        let blacklist = Blacklist::from_path(temp_file.path()).unwrap();
        assert_eq!(blacklist.len(), 2);
    }

    #[test]
    fn test_contains_case_insensitive() {
        let blacklist = Blacklist::parse("testpassword\n");

        assert!(blacklist.contains("testpassword"));
        assert!(blacklist.contains("TESTPASSWORD"));
        assert!(!blacklist.contains("veryuncommonpassword987"));
    }

    #[test]
    fn test_embedded_list_is_normalized() {
        let blacklist = Blacklist::embedded();
        assert!(!blacklist.is_empty());
        assert!(blacklist.iter().all(|e| e == e.to_lowercase()));
    }

    #[test]
    fn test_iter_yields_parsed_entries() {
        let blacklist = Blacklist::parse("Hello\n  football \n\nhello\n");
        let mut entries: Vec<&str> = blacklist.iter().collect();
        entries.sort();
        assert_eq!(entries, vec!["football", "hello"]);
    }
}
