use crate::ranking::Scorer;

/// Score when one string contains the other
pub const CONTAINMENT_SCORE: f64 = 95.0;

/// Score when the strings agree as a prefix once spaces are ignored
pub const COMPACT_PREFIX_SCORE: f64 = 90.0;

/// Cheap per-keystroke scorer: containment, space-insensitive prefix,
/// then positional character agreement.
///
/// Not symmetric: the prefix tier only checks whether `a` starts with `b`.
pub struct PositionalScorer;

impl PositionalScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PositionalScorer {
    fn default() -> Self {
        Self::new()
    }
}

fn compact(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

fn positional_agreement(a: &str, b: &str) -> f64 {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let longest = len_a.max(len_b);

    if longest == 0 {
        return 100.0;
    }

    let agreeing = a
        .chars()
        .zip(b.chars())
        .filter(|(ca, cb)| ca == cb)
        .count();

    agreeing as f64 * 100.0 / longest as f64
}

impl Scorer for PositionalScorer {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        if a.contains(b) || b.contains(a) {
            return CONTAINMENT_SCORE;
        }

        if compact(a).starts_with(&compact(b)) {
            return COMPACT_PREFIX_SCORE;
        }

        positional_agreement(a, b)
    }

    fn name(&self) -> &str {
        "positional"
    }
}
