//! Turn-cycle phases shared by both controllers.

use serde::{Deserialize, Serialize};

/// Where a match is in its roll → move → animate cycle.
///
/// `Animating` is a logical state: the controller has already applied the
/// outcome and waits for the host to acknowledge that visuals caught up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Table is being configured by the host; no commands accepted.
    ///
    /// Builders hand out matches already in `WaitingForRoll`, so a
    /// controller never reports this phase. Hosts use it for their own
    /// pre-match screens, and restoring a snapshot in it is rejected.
    Setup,
    /// Active player must roll.
    WaitingForRoll,
    /// Roll produced several legal tokens; a human must pick one.
    WaitingForMove,
    /// Outcome applied; waiting for the animation acknowledgement.
    Animating,
    /// Host paused the match.
    Paused,
    /// Match ended or was abandoned.
    GameOver,
}

impl GamePhase {
    /// Phases in which the dynamic safe-zone clock runs.
    #[must_use]
    pub fn is_active_play(self) -> bool {
        matches!(
            self,
            GamePhase::WaitingForRoll | GamePhase::WaitingForMove | GamePhase::Animating
        )
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::Setup => "setup",
            GamePhase::WaitingForRoll => "waiting for roll",
            GamePhase::WaitingForMove => "waiting for move",
            GamePhase::Animating => "animating",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "game over",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_play_phases() {
        assert!(GamePhase::WaitingForRoll.is_active_play());
        assert!(GamePhase::WaitingForMove.is_active_play());
        assert!(GamePhase::Animating.is_active_play());
        assert!(!GamePhase::Setup.is_active_play());
        assert!(!GamePhase::Paused.is_active_play());
        assert!(!GamePhase::GameOver.is_active_play());
    }
}
