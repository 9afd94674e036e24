use crate::gesture::Gesture;
use serde::Deserialize;
use serde::Serialize;

/// Result of one round from the player's perspective.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

/// (player, opponent)
impl From<(Gesture, Gesture)> for Outcome {
    fn from((player, opponent): (Gesture, Gesture)) -> Self {
        if player == opponent {
            Self::Draw
        } else if player.beats(&opponent) {
            Self::Win
        } else {
            Self::Lose
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::Lose => write!(f, "lose"),
            Self::Draw => write!(f, "draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Gesture::*;

    #[test]
    fn identical_gestures_draw() {
        for gesture in Gesture::all() {
            assert!(Outcome::from((gesture, gesture)) == Outcome::Draw);
        }
    }

    #[test]
    fn ordered_pairs_follow_the_dominance_table() {
        assert!(Outcome::from((Rock, Scissors)) == Outcome::Win);
        assert!(Outcome::from((Scissors, Paper)) == Outcome::Win);
        assert!(Outcome::from((Paper, Rock)) == Outcome::Win);
        assert!(Outcome::from((Scissors, Rock)) == Outcome::Lose);
        assert!(Outcome::from((Paper, Scissors)) == Outcome::Lose);
        assert!(Outcome::from((Rock, Paper)) == Outcome::Lose);
    }
}
