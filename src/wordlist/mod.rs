//! Personal wordlist generation.
//!
//! Keywords are expanded into bases (each keyword plus every ordered pair of
//! distinct keywords), and every base goes through case variants, leetspeak
//! variants and affixes. Numeric fields add their trailing digits. The result
//! keeps generation order and drops duplicates, so identical input always
//! produces identical output.

mod export;
mod keywords;
pub mod leet;

pub use export::{write_wordlist, write_wordlist_to, WordlistError};
pub use keywords::{Keyword, KeywordKind, KeywordSet};

use std::collections::HashSet;

/// Suffixes appended to every variant unless configured otherwise.
pub const DEFAULT_SUFFIXES: &[&str] = &["123", "2024", "!", "@", "1", "01"];

/// Cap on leetspeak variants per case variant.
pub const DEFAULT_MAX_LEET_VARIANTS: usize = 200;

/// Output file used when none is given.
pub const DEFAULT_OUTPUT_PATH: &str = "custom_wordlist.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub suffixes: Vec<String>,
    pub prefixes: Vec<String>,
    pub max_leet_variants: usize,
    /// Truncates the final list when set.
    pub max_words: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            prefixes: Vec::new(),
            max_leet_variants: DEFAULT_MAX_LEET_VARIANTS,
            max_words: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }
}

/// Deduplicated candidate passwords in generation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Insertion-ordered set.
#[derive(Default)]
struct Collector {
    seen: HashSet<String>,
    words: Vec<String>,
}

impl Collector {
    fn insert(&mut self, word: String) {
        if self.seen.insert(word.clone()) {
            self.words.push(word);
        }
    }
}

/// Lowercase, uppercase, capitalized and original forms, without repeats.
pub fn case_variants(word: &str) -> Vec<String> {
    let candidates = [
        word.to_lowercase(),
        word.to_uppercase(),
        capitalize(word),
        word.to_string(),
    ];

    let mut out: Vec<String> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !out.contains(&candidate) {
            out.push(candidate);
        }
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Generates the wordlist for `keywords`.
pub fn generate(keywords: &KeywordSet, config: &GeneratorConfig) -> Wordlist {
    let mut collector = Collector::default();
    let values = keywords.values();

    let mut bases = values.clone();
    for (i, first) in values.iter().enumerate() {
        for (j, second) in values.iter().enumerate() {
            if i != j {
                bases.push(format!("{}{}", first, second));
            }
        }
    }

    for base in &bases {
        for cased in case_variants(base) {
            for variant in leet::variants(&cased, config.max_leet_variants) {
                collector.insert(variant.clone());
                for suffix in &config.suffixes {
                    collector.insert(format!("{}{}", variant, suffix));
                }
                for prefix in &config.prefixes {
                    collector.insert(format!("{}{}", prefix, variant));
                }
            }
        }
    }

    for keyword in keywords.iter().filter(|k| k.kind.is_numeric()) {
        for fragment in numeric_fragments(&keyword.value) {
            collector.insert(fragment);
        }
    }

    let mut words = collector.words;
    if let Some(limit) = config.max_words {
        words.truncate(limit);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        keywords = keywords.len(),
        bases = bases.len(),
        words = words.len(),
        "wordlist generated"
    );

    Wordlist { words }
}

/// Raw value plus its last two and last four characters.
fn numeric_fragments(value: &str) -> Vec<String> {
    let chars: Vec<char> = value.chars().collect();
    let mut out = vec![value.to_string()];
    if chars.len() >= 4 {
        out.push(chars[chars.len() - 2..].iter().collect());
        out.push(chars[chars.len() - 4..].iter().collect());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn raj_tommy() -> KeywordSet {
        ["raj", "tommy"].into_iter().collect()
    }

    #[test]
    fn test_case_variants() {
        assert_eq!(case_variants("tommy"), vec!["tommy", "TOMMY", "Tommy"]);
        assert_eq!(case_variants("mIxEd"), vec!["mixed", "MIXED", "Mixed", "mIxEd"]);
        assert_eq!(case_variants("2024"), vec!["2024"]);
    }

    #[test]
    fn test_raj_tommy_with_123() {
        let config = GeneratorConfig::default().with_suffixes(["123"]);
        let wordlist = generate(&raj_tommy(), &config);

        for expected in [
            "raj",
            "tommy",
            "raj123",
            "tommy123",
            "rajtommy123",
            "tommyraj123",
            "Raj123",
            "TOMMY123",
            "r4j123",
            "70mmy123",
            "Rajtommy123",
            "r4j70mmy123",
        ] {
            assert!(wordlist.contains(expected), "missing {}", expected);
        }
        assert!(!wordlist.contains("raj2024"));
    }

    #[test]
    fn test_contains_lowercase_of_every_keyword() {
        let keywords = KeywordSet::new()
            .with(KeywordKind::Name, "Priya")
            .with(KeywordKind::Pet, "BRUNO")
            .with(KeywordKind::Fav, "sunset");
        let wordlist = generate(&keywords, &GeneratorConfig::default());

        for keyword in ["priya", "bruno", "sunset"] {
            assert!(wordlist.contains(keyword), "missing {}", keyword);
        }
    }

    #[test]
    fn test_fully_substituted_variant_present() {
        let keywords: KeywordSet = ["assets", "bilge"].into_iter().collect();
        let config = GeneratorConfig {
            max_leet_variants: 3,
            ..GeneratorConfig::default()
        };
        let wordlist = generate(&keywords, &config);

        assert!(wordlist.contains("455375"));
        assert!(wordlist.contains("81193"));
    }

    #[test]
    fn test_no_duplicates() {
        let keywords = KeywordSet::new()
            .with(KeywordKind::Name, "anna")
            .with(KeywordKind::Dob, "1990")
            .with(KeywordKind::Numbers, "1990 7");
        let wordlist = generate(&keywords, &GeneratorConfig::default());

        let unique: HashSet<_> = wordlist.iter().collect();
        assert_eq!(unique.len(), wordlist.len());
    }

    #[test]
    fn test_empty_keywords_empty_wordlist() {
        let wordlist = generate(&KeywordSet::new(), &GeneratorConfig::default());
        assert!(wordlist.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let config = GeneratorConfig::default();
        let first = generate(&raj_tommy(), &config);
        let second = generate(&raj_tommy(), &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_keywords_precede_concatenations() {
        let wordlist = generate(&raj_tommy(), &GeneratorConfig::default());
        let words = wordlist.as_slice();
        assert_eq!(words[0], "raj");
        let tommy = words.iter().position(|w| w == "tommy").unwrap();
        let pair = words.iter().position(|w| w == "rajtommy").unwrap();
        assert!(tommy < pair);
    }

    #[test]
    fn test_prefixes() {
        let config = GeneratorConfig::default()
            .with_suffixes(Vec::<String>::new())
            .with_prefixes(["#"]);
        let wordlist = generate(&raj_tommy(), &config);
        assert!(wordlist.contains("#raj"));
        assert!(!wordlist.contains("raj123"));
    }

    #[test]
    fn test_numeric_fragments() {
        let keywords = KeywordSet::new()
            .with(KeywordKind::Dob, "14081995")
            .with(KeywordKind::Phone, "42");
        let wordlist = generate(&keywords, &GeneratorConfig::default());

        assert!(wordlist.contains("14081995"));
        assert!(wordlist.contains("95"));
        assert!(wordlist.contains("1995"));
        assert!(wordlist.contains("42"));
    }

    #[test]
    fn test_max_words_truncates() {
        let config = GeneratorConfig {
            max_words: Some(10),
            ..GeneratorConfig::default()
        };
        let full = generate(&raj_tommy(), &GeneratorConfig::default());
        let limited = generate(&raj_tommy(), &config);

        assert_eq!(limited.len(), 10);
        assert_eq!(limited.as_slice(), &full.as_slice()[..10]);
    }
}
