//! Dictionary section - detects common passwords hidden behind leetspeak
//! and trailing digits or symbols.

use secrecy::{ExposeSecret, SecretString};
use super::{Finding, FindingKind, SectionContext, SectionResult};
use crate::wordlist::leet;

const MIN_STEM_LENGTH: usize = 4;

/// Checks whether the password is a common password once leetspeak is read
/// as the letters it stands for and surrounding digits/symbols are removed.
///
/// Exact blacklist matches are left to the blacklist section.
pub fn dictionary_section(password: &SecretString, ctx: &SectionContext<'_>) -> SectionResult {
    let pwd = password.expose_secret();
    if ctx.blacklist.contains(pwd) {
        return None;
    }

    let chars: Vec<char> = pwd.chars().collect();
    let len = chars.len();
    let is_affix = |c: &&char| c.is_ascii_digit() || c.is_ascii_punctuation();
    let tail = chars.iter().rev().take_while(is_affix).count();
    // digits/symbols only: trim from the end
    let head = if tail == len {
        0
    } else {
        chars.iter().take_while(is_affix).count()
    };

    // Every stem left after dropping part of the leading and trailing
    // digits/symbols, compared leet-aware against entries of the same length.
    let hit = (0..=head).any(|start| {
        (len - tail..=len)
            .filter(|&end| end >= start + MIN_STEM_LENGTH)
            .any(|end| {
                let stem: String = chars[start..end].iter().collect();
                ctx.blacklist.contains(&stem)
                    || ctx.blacklist.iter().any(|entry| leet::spells(&stem, entry))
            })
    });

    if hit {
        return Some(Finding::new(
            FindingKind::Dictionary,
            "This is similar to a commonly used password",
            "Predictable substitutions like '@' instead of 'a' and appended digits don't help very much",
        ));
    }
    None
}
