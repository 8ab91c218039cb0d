//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::{Finding, FindingKind, SectionContext, SectionResult};

pub const MIN_LENGTH: usize = 8;

/// Checks if the password meets minimum length requirements.
pub fn length_section(password: &SecretString, _ctx: &SectionContext<'_>) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(Finding::new(
            FindingKind::TooShort,
            format!("Password is shorter than {} characters", MIN_LENGTH),
            "Use a longer password; length matters more than complexity",
        ));
    }
    None
}
