pub mod normalize;
pub mod similarity;
pub mod variants;

pub use normalize::{clean_club_name, normalize};
pub use similarity::PositionalScorer;
pub use variants::expand;

/// Trait for similarity scoring implementations
pub trait Scorer: Send + Sync {
    /// Closeness of two normalized strings, 0.0 - 100.0
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Get scorer name for logging
    fn name(&self) -> &str;
}
