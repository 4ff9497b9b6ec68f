use std::collections::BTreeSet;

/// Letters that are routinely typed in place of each other
const HOMOPHONES: &[(char, char)] = &[
    ('е', 'э'),
    ('э', 'е'),
    ('и', 'й'),
    ('й', 'и'),
];

/// Upper bound of alternatives per letter in [`HOMOPHONES`]
pub const MAX_EQUIVALENTS_PER_LETTER: usize = 1;

fn equivalents(c: char) -> impl Iterator<Item = char> {
    HOMOPHONES
        .iter()
        .filter(move |(from, _)| *from == c)
        .map(|(_, to)| *to)
}

/// Alternate spellings reachable by one homophone substitution.
///
/// Always contains `normalized` itself; substitutions are applied one
/// position at a time and never combined.
pub fn expand(normalized: &str) -> BTreeSet<String> {
    let chars: Vec<char> = normalized.chars().collect();
    let mut variants = BTreeSet::new();
    variants.insert(normalized.to_string());

    for (i, &c) in chars.iter().enumerate() {
        for alt in equivalents(c) {
            let mut spelled = chars.clone();
            spelled[i] = alt;
            variants.insert(spelled.into_iter().collect());
        }
    }

    variants
}
