use serde::{Deserialize, Serialize};

/// Sound played after an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundCue {
    Win,
    Lose,
}

impl SoundCue {
    pub fn for_answer(correct: bool) -> Self {
        if correct {
            SoundCue::Win
        } else {
            SoundCue::Lose
        }
    }

    /// Asset path served by the front end
    pub fn asset(self) -> &'static str {
        match self {
            SoundCue::Win => "/win_sound.mp3",
            SoundCue::Lose => "/lose_sound.mp3",
        }
    }
}

/// Mute switch in front of the cues
#[derive(Debug, Clone, Default)]
pub struct SoundBoard {
    muted: bool,
}

impl SoundBoard {
    pub fn new(muted: bool) -> Self {
        Self { muted }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Flip the mute switch, returning the new state
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    pub fn cue(&self, correct: bool) -> Option<SoundCue> {
        (!self.muted).then(|| SoundCue::for_answer(correct))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cues() {
        let board = SoundBoard::default();
        assert_eq!(board.cue(true), Some(SoundCue::Win));
        assert_eq!(board.cue(false).map(SoundCue::asset), Some("/lose_sound.mp3"));
    }

    #[test]
    fn test_mute() {
        let mut board = SoundBoard::new(false);
        assert!(board.toggle_mute());
        assert_eq!(board.cue(true), None);
        assert!(!board.toggle_mute());
        assert!(board.cue(true).is_some());
    }
}
