use super::opponent::Opponent;
use super::outcome::Outcome;
use crate::gesture::Gesture;
use serde::Serialize;

/// One resolved comparison of player versus house.
///
/// Callers guarantee a playable player gesture; ambiguous detections never
/// reach this type. Resolution is pure apart from whatever randomness the
/// injected strategy draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Round {
    player: Gesture,
    opponent: Gesture,
    outcome: Outcome,
}

impl Round {
    /// Draw the house move from the strategy and score the pair.
    pub fn resolve(player: Gesture, opponent: &mut dyn Opponent) -> Self {
        let counter = opponent.choose(player);
        Self {
            player,
            opponent: counter,
            outcome: Outcome::from((player, counter)),
        }
    }
    pub fn player(&self) -> Gesture {
        self.player
    }
    pub fn opponent(&self) -> Gesture {
        self.opponent
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} vs {}: {}", self.player, self.opponent, self.outcome)
    }
}
