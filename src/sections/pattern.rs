//! Pattern analysis section - detects repetitive and sequential patterns.

use secrecy::{ExposeSecret, SecretString};
use super::{Finding, FindingKind, SectionContext, SectionResult};

/// Analyzes password for repetitive and sequential patterns.
pub fn pattern_analysis_section(password: &SecretString, _ctx: &SectionContext<'_>) -> SectionResult {
    let chars: Vec<char> = password.expose_secret().chars().collect();
    if chars.len() < 3 {
        return None;
    }

    // Repeated chars (e.g., "aaa")
    let mut repeated_count = 1;
    for i in 1..chars.len() {
        if chars[i] == chars[i - 1] {
            repeated_count += 1;
            if repeated_count >= 3 {
                return Some(Finding::new(
                    FindingKind::Repetitive,
                    "Repeats like \"aaa\" are easy to guess",
                    "Avoid repeated words and characters",
                ));
            }
        } else {
            repeated_count = 1;
        }
    }

    // Sequences of 4+ consecutive characters (e.g., "abcd", "4321")
    const WINDOW: usize = 4;
    if chars.len() >= WINDOW {
        let is_sequential = chars.windows(WINDOW).any(|window| {
            let ascending = window.windows(2).all(|w| w[1] as i32 == w[0] as i32 + 1);
            let descending = window.windows(2).all(|w| w[1] as i32 == w[0] as i32 - 1);
            ascending || descending
        });

        if is_sequential {
            return Some(Finding::new(
                FindingKind::Sequential,
                "Sequences like abc or 6543 are easy to guess",
                "Avoid sequences",
            ));
        }
    }

    None
}
