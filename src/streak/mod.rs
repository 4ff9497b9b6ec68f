pub mod controller;
pub mod tween;

pub use controller::{ColorPhase, StreakController, StreakPhase, StreakState, StreakTimings};
pub use tween::{Easing, Tween};
