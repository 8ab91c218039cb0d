//! Blacklist section - checks if password is in common password list.

use secrecy::{ExposeSecret, SecretString};
use super::{Finding, FindingKind, SectionContext, SectionResult};

/// Checks if the password is in the blacklist of common passwords.
///
/// # Returns
/// - `Some(finding)` if password is blacklisted
/// - `None` if password is not in blacklist
pub fn blacklist_section(password: &SecretString, ctx: &SectionContext<'_>) -> SectionResult {
    if ctx.blacklist.contains(password.expose_secret()) {
        return Some(Finding::new(
            FindingKind::Blacklisted,
            "This is a very common password",
            "Avoid passwords that appear in common password lists",
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blacklist::Blacklist;
    use crate::sections::test_support::{secret, with_context};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn setup_with_tempfile(passwords: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for pwd in passwords {
            writeln!(temp_file, "{}", pwd).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    fn test_blacklist_section_common_password() {
        let result = with_context(&[], |ctx| blacklist_section(&secret("Password"), ctx));
        assert!(matches!(
            result,
            Some(Finding { kind: FindingKind::Blacklisted, .. })
        ));
    }

    #[test]
    fn test_blacklist_section_custom_file() {
        let temp_file = setup_with_tempfile(&["hunter2", "correcthorse"]);
        let blacklist = Blacklist::from_path(temp_file.path()).unwrap();
        let ctx = SectionContext {
            blacklist: &blacklist,
            user_inputs: &[],
        };

        assert!(blacklist_section(&secret("hunter2"), &ctx).is_some());
        assert_eq!(blacklist_section(&secret("password"), &ctx), None);
    }

    #[test]
    fn test_blacklist_section_strong_password() {
        let result = with_context(&[], |ctx| {
            blacklist_section(&secret("CorrectHorseBatteryStaple!123"), ctx)
        });
        assert_eq!(result, None);
    }
}
