use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const COMBINING_DIAERESIS: char = '\u{0308}';

/// Quote characters stripped from both ends of club names
const CLUB_QUOTES: &[char] = &['"', '\'', '«', '»', '„', '“', '”'];

/// Canonical comparison key for names and queries.
///
/// Lower-cases, folds `ё` into `е`, composes to NFC, collapses whitespace
/// runs and trims. Other diacritics, punctuation and digits are kept.
///
/// The fold works on the decomposed form and strips every diaeresis in the
/// mark sequence of an `е`, so stacked marks (`ё` + U+0308) cannot compose
/// back into `ё` on a later pass.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();

    let mut folded = String::with_capacity(lowered.len());
    let mut on_ie = false;
    for c in lowered.nfd() {
        if !is_combining_mark(c) {
            on_ie = c == 'е';
        } else if on_ie && c == COMBINING_DIAERESIS {
            continue;
        }
        folded.push(c);
    }

    let composed: String = folded.nfc().collect();
    composed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalized club name with surrounding quotes removed
pub fn clean_club_name(raw: &str) -> String {
    let unquoted = raw.trim().trim_matches(|c| CLUB_QUOTES.contains(&c));
    normalize(unquoted)
}
