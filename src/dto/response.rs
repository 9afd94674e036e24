use crate::gesture::Detection;
use crate::gesture::Gesture;
use crate::play::Outcome;
use crate::play::Round;
use crate::session::Scores;
use crate::Confidence;
use serde::Deserialize;
use serde::Serialize;

/// Classification report for one frame. `gesture` is one of
/// `"rock" | "paper" | "scissors" | "none"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glance {
    gesture: String,
    confidence: Confidence,
}

impl Glance {
    pub fn gesture(&self) -> &str {
        &self.gesture
    }
    pub fn confidence(&self) -> Confidence {
        self.confidence
    }
}

impl From<Detection> for Glance {
    fn from(detection: Detection) -> Self {
        Self {
            gesture: detection
                .gesture()
                .map(|g| g.to_string())
                .unwrap_or_else(|| "none".to_string()),
            confidence: detection.confidence(),
        }
    }
}

/// Round resolution report: both moves, the result, and the running scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    result: Outcome,
    player: Gesture,
    opponent: Gesture,
    scores: Scores,
}

impl Report {
    pub fn result(&self) -> Outcome {
        self.result
    }
    pub fn scores(&self) -> Scores {
        self.scores
    }
}

impl From<(Round, Scores)> for Report {
    fn from((round, scores): (Round, Scores)) -> Self {
        Self {
            result: round.outcome(),
            player: round.player(),
            opponent: round.opponent(),
            scores,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Fingers;
    use crate::play::Fixed;

    #[test]
    fn empty_detections_read_none() {
        let glance = Glance::from(Detection::from_frame(None));
        assert!(glance.gesture() == "none");
        assert!(glance.confidence() == 0);
    }

    #[test]
    fn glances_carry_the_wire_label() {
        let fingers = Fingers::from((false, true, true, false, false));
        let glance = Glance::from(Detection::from(&fingers));
        assert!(glance.gesture() == "scissors");
        assert!(glance.confidence() == 95);
    }

    #[test]
    fn reports_serialize_the_wire_shape() {
        let round = Round::resolve(Gesture::Rock, &mut Fixed(Gesture::Scissors));
        let mut scores = Scores::default();
        scores.tally(round.outcome());
        let report = Report::from((round, scores));
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["result"] == "win");
        assert!(json["player"] == "rock");
        assert!(json["opponent"] == "scissors");
        assert!(json["scores"]["player"] == 1);
    }
}
