//! Leetspeak substitution table, variant expansion and leet-aware matching.

/// Letter substitutions. The first alternative is the primary one, used for
/// the fully-substituted variant.
pub const LEET_TABLE: &[(char, &[char])] = &[
    ('a', &['4', '@']),
    ('b', &['8']),
    ('e', &['3']),
    ('g', &['9']),
    ('i', &['1', '!']),
    ('l', &['1', '7']),
    ('o', &['0']),
    ('s', &['5', '$']),
    ('t', &['7']),
];

/// Substitutions for a character, matched case-insensitively.
pub fn substitutions(c: char) -> Option<&'static [char]> {
    let lower = c.to_ascii_lowercase();
    LEET_TABLE
        .iter()
        .find(|(letter, _)| *letter == lower)
        .map(|(_, alts)| *alts)
}

/// Applies the primary substitution to every mapped character.
pub fn fully_substituted(word: &str) -> String {
    word.chars()
        .map(|c| substitutions(c).map_or(c, |alts| alts[0]))
        .collect()
}

/// Expands `word` into leetspeak variants.
///
/// Variants are the cross-product of every mapped character's alternatives,
/// walked in odometer order (rightmost position changes fastest) and
/// starting from the unmodified word. At most `max_variants` product entries
/// are kept; the fully-substituted variant is appended when the cap cut it
/// off.
pub fn variants(word: &str, max_variants: usize) -> Vec<String> {
    if word.is_empty() {
        return Vec::new();
    }

    let pools: Vec<Vec<char>> = word
        .chars()
        .map(|c| {
            let mut pool = vec![c];
            if let Some(alts) = substitutions(c) {
                pool.extend_from_slice(alts);
            }
            pool
        })
        .collect();

    let cap = max_variants.max(1);
    let mut indices = vec![0usize; pools.len()];
    let mut out = Vec::new();

    'product: while out.len() < cap {
        out.push(
            indices
                .iter()
                .zip(&pools)
                .map(|(&i, pool)| pool[i])
                .collect::<String>(),
        );

        let mut pos = pools.len();
        loop {
            if pos == 0 {
                break 'product;
            }
            pos -= 1;
            indices[pos] += 1;
            if indices[pos] < pools[pos].len() {
                break;
            }
            indices[pos] = 0;
        }
    }

    let full = fully_substituted(word);
    if !out.contains(&full) {
        out.push(full);
    }
    out
}

/// Whether `symbol`, as typed in a password, can stand for the plain
/// character `plain`: the same character ignoring case, or any of its
/// substitutions. `1` reads as both `i` and `l`.
pub fn reads_as(symbol: char, plain: char) -> bool {
    symbol.to_lowercase().eq(plain.to_lowercase())
        || substitutions(plain).is_some_and(|alts| alts.contains(&symbol))
}

/// Whether `candidate` spells `plain`, character by character, through
/// leetspeak.
pub fn spells(candidate: &str, plain: &str) -> bool {
    candidate.chars().count() == plain.chars().count()
        && candidate
            .chars()
            .zip(plain.chars())
            .all(|(symbol, letter)| reads_as(symbol, letter))
}

/// Whether some run of `haystack` spells `plain` through leetspeak.
pub fn contains_spelled(haystack: &str, plain: &str) -> bool {
    let needle: Vec<char> = plain.chars().collect();
    if needle.is_empty() {
        return true;
    }
    let hay: Vec<char> = haystack.chars().collect();
    hay.windows(needle.len()).any(|window| {
        window
            .iter()
            .zip(&needle)
            .all(|(&symbol, &letter)| reads_as(symbol, letter))
    })
}
