pub mod athlete;
pub mod candidate;
pub mod task;

pub use athlete::{Athlete, Club};
pub use candidate::{MatchCandidate, MatchKind};
pub use task::{Task, TaskVariant};
