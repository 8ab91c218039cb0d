//! Password evaluation sections
//!
//! Each section analyzes a specific aspect of password strength and reports
//! at most one finding.

mod blacklist;
mod dictionary;
mod length;
mod pattern;
mod personal;
mod variety;

pub use blacklist::blacklist_section;
pub use dictionary::dictionary_section;
pub use length::length_section;
pub use pattern::pattern_analysis_section;
pub use personal::personal_info_section;
pub use variety::{character_variety_section, CharClasses};

use crate::blacklist::Blacklist;
use secrecy::SecretString;

/// Data shared by all sections during one evaluation.
pub struct SectionContext<'a> {
    pub blacklist: &'a Blacklist,
    pub user_inputs: &'a [String],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingKind {
    Blacklisted,
    Dictionary,
    PersonalInfo,
    TooShort,
    LowVariety,
    Repetitive,
    Sequential,
}

impl FindingKind {
    /// Findings that make a password guessable regardless of its length.
    pub fn is_guessable(self) -> bool {
        matches!(
            self,
            FindingKind::Blacklisted | FindingKind::Dictionary | FindingKind::PersonalInfo
        )
    }
}

/// A weakness detected by a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub kind: FindingKind,
    pub warning: String,
    pub suggestion: String,
}

impl Finding {
    pub fn new(kind: FindingKind, warning: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            kind,
            warning: warning.into(),
            suggestion: suggestion.into(),
        }
    }
}

/// Result type for section evaluation functions.
/// - `Some(finding)` - Section failed with a finding
/// - `None` - Section passed
pub type SectionResult = Option<Finding>;

pub type Section = fn(&SecretString, &SectionContext<'_>) -> SectionResult;

/// Sections in evaluation order.
pub const SECTIONS: &[(&str, Section)] = &[
    ("blacklist", blacklist_section),
    ("dictionary", dictionary_section),
    ("personal", personal_info_section),
    ("length", length_section),
    ("variety", character_variety_section),
    ("pattern", pattern_analysis_section),
];

#[cfg(test)]
pub(crate) mod test_support {
    use super::SectionContext;
    use crate::blacklist::Blacklist;
    use secrecy::SecretString;

    pub fn secret(password: &str) -> SecretString {
        SecretString::new(password.to_string().into())
    }

    pub fn with_context<R>(user_inputs: &[String], f: impl FnOnce(&SectionContext<'_>) -> R) -> R {
        let blacklist = Blacklist::embedded();
        let ctx = SectionContext {
            blacklist: &blacklist,
            user_inputs,
        };
        f(&ctx)
    }
}
