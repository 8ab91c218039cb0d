//! Keyword normalization.

use std::fmt;

/// Which personal field a keyword was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordKind {
    Name,
    Dob,
    Pet,
    Fav,
    Numbers,
    Phone,
    Extra,
}

impl KeywordKind {
    /// Numeric fields also contribute their trailing digits to the wordlist.
    pub fn is_numeric(self) -> bool {
        matches!(self, KeywordKind::Dob | KeywordKind::Numbers | KeywordKind::Phone)
    }
}

impl fmt::Display for KeywordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeywordKind::Name => "name",
            KeywordKind::Dob => "dob",
            KeywordKind::Pet => "pet",
            KeywordKind::Fav => "fav",
            KeywordKind::Numbers => "numbers",
            KeywordKind::Phone => "phone",
            KeywordKind::Extra => "keyword",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    pub kind: KeywordKind,
    pub value: String,
}

/// Ordered set of normalized keywords.
///
/// Values are trimmed, multi-word values are split on whitespace, empty
/// values are dropped and the first occurrence of a value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<Keyword>,
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every word of `raw` under `kind`.
    pub fn push(&mut self, kind: KeywordKind, raw: &str) -> &mut Self {
        for part in raw.split_whitespace() {
            if self.keywords.iter().any(|k| k.value == part) {
                continue;
            }
            self.keywords.push(Keyword {
                kind,
                value: part.to_string(),
            });
        }
        self
    }

    /// Builder form of [`push`](Self::push).
    pub fn with(mut self, kind: KeywordKind, raw: &str) -> Self {
        self.push(kind, raw);
        self
    }

    /// Adds an optional field, ignoring `None`.
    pub fn push_opt(&mut self, kind: KeywordKind, raw: Option<&str>) -> &mut Self {
        if let Some(raw) = raw {
            self.push(kind, raw);
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Keyword> {
        self.keywords.iter()
    }

    /// Keyword values in insertion order.
    pub fn values(&self) -> Vec<String> {
        self.keywords.iter().map(|k| k.value.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = KeywordSet::new();
        for raw in iter {
            set.push(KeywordKind::Extra, raw.as_ref());
        }
        set
    }
}
