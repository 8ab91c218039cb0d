//! Personal information section - detects user supplied tokens in the password.

use secrecy::{ExposeSecret, SecretString};
use super::{Finding, FindingKind, SectionContext, SectionResult};
use crate::wordlist::leet;

const MIN_TOKEN_LENGTH: usize = 3;

/// Checks whether the password contains one of the user's personal tokens
/// (name, pet, birth year...), also through leetspeak.
pub fn personal_info_section(password: &SecretString, ctx: &SectionContext<'_>) -> SectionResult {
    let pwd = password.expose_secret();

    let found = ctx
        .user_inputs
        .iter()
        .filter(|token| token.chars().count() >= MIN_TOKEN_LENGTH)
        .any(|token| leet::contains_spelled(pwd, token));

    if found {
        return Some(Finding::new(
            FindingKind::PersonalInfo,
            "Password contains personal information",
            "Avoid names, dates and other details that are associated with you",
        ));
    }
    None
}
