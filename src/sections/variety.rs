//! Character variety section - checks for uppercase, lowercase, numbers, special chars.

use secrecy::{ExposeSecret, SecretString};
use super::{Finding, FindingKind, SectionContext, SectionResult};

/// Character classes present in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharClasses {
    pub upper: bool,
    pub lower: bool,
    pub digit: bool,
    pub special: bool,
}

impl CharClasses {
    pub fn of(pwd: &str) -> Self {
        Self {
            upper: pwd.chars().any(|c| c.is_uppercase()),
            lower: pwd.chars().any(|c| c.is_lowercase()),
            digit: pwd.chars().any(|c| c.is_ascii_digit()),
            special: pwd.chars().any(|c| !c.is_alphanumeric()),
        }
    }

    pub fn count(self) -> usize {
        [self.upper, self.lower, self.digit, self.special]
            .iter()
            .filter(|&&b| b)
            .count()
    }

    /// Size of the alphabet an attacker brute forcing these classes must cover.
    pub fn pool_size(self) -> u32 {
        let mut pool = 0;
        if self.lower {
            pool += 26;
        }
        if self.upper {
            pool += 26;
        }
        if self.digit {
            pool += 10;
        }
        if self.special {
            pool += 33;
        }
        pool
    }
}

/// Checks if the password contains a variety of character types.
pub fn character_variety_section(password: &SecretString, _ctx: &SectionContext<'_>) -> SectionResult {
    let classes = CharClasses::of(password.expose_secret());

    let missing: Vec<_> = vec![
        if !classes.upper { Some("uppercase") } else { None },
        if !classes.lower { Some("lowercase") } else { None },
        if !classes.digit { Some("numbers") } else { None },
        if !classes.special { Some("special characters") } else { None },
    ]
    .into_iter()
    .flatten()
    .collect();

    if !missing.is_empty() {
        return Some(Finding::new(
            FindingKind::LowVariety,
            format!("Missing: {}", missing.join(", ")),
            "Mix uppercase, lowercase, numbers and symbols",
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::{secret, with_context};

    fn warning(password: &str) -> Option<String> {
        with_context(&[], |ctx| character_variety_section(&secret(password), ctx)).map(|f| f.warning)
    }

    #[test]
    fn test_variety_section_missing_uppercase() {
        assert!(warning("lowercase123!").unwrap().contains("uppercase"));
    }

    #[test]
    fn test_variety_section_missing_lowercase() {
        assert!(warning("UPPERCASE123!").unwrap().contains("lowercase"));
    }

    #[test]
    fn test_variety_section_missing_numbers() {
        assert!(warning("NoNumbers!").unwrap().contains("numbers"));
    }

    #[test]
    fn test_variety_section_missing_special() {
        assert!(warning("NoSpecial123").unwrap().contains("special"));
    }

    #[test]
    fn test_variety_section_all_categories() {
        assert_eq!(warning("HasAll123!@#"), None);
    }

    #[test]
    fn test_char_classes_pool_size() {
        assert_eq!(CharClasses::of("abc").pool_size(), 26);
        assert_eq!(CharClasses::of("aB3!").pool_size(), 95);
        assert_eq!(CharClasses::of("").pool_size(), 0);
        assert_eq!(CharClasses::of("aB3!").count(), 4);
    }
}
