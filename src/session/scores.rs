use crate::play::Outcome;
use crate::Score;
use serde::Deserialize;
use serde::Serialize;

/// Cumulative counters for one session. Draws move neither score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    player: Score,
    ai: Score,
    draws: Score,
}

impl Scores {
    pub fn player(&self) -> Score {
        self.player
    }
    pub fn ai(&self) -> Score {
        self.ai
    }
    pub fn draws(&self) -> Score {
        self.draws
    }
    /// Apply one resolved outcome. Exactly one counter moves.
    pub fn tally(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.player += 1,
            Outcome::Lose => self.ai += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

impl std::fmt::Display for Scores {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "you {} · house {} · draws {}",
            self.player, self.ai, self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_outcome_moves_one_counter() {
        let mut scores = Scores::default();
        scores.tally(Outcome::Win);
        scores.tally(Outcome::Win);
        scores.tally(Outcome::Lose);
        scores.tally(Outcome::Draw);
        assert!(scores.player() == 2);
        assert!(scores.ai() == 1);
        assert!(scores.draws() == 1);
    }

    #[test]
    fn wins_leave_other_counters_alone() {
        let mut scores = Scores::default();
        for _ in 0..7 {
            scores.tally(Outcome::Win);
        }
        assert!(scores.player() == 7);
        assert!(scores.ai() == 0);
        assert!(scores.draws() == 0);
    }

    #[test]
    fn serializes_the_wire_shape() {
        let scores = Scores::default();
        let json = serde_json::to_string(&scores).unwrap();
        assert!(json == r#"{"player":0,"ai":0,"draws":0}"#);
    }
}
