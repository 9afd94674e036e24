use super::fingers::Fingers;
use super::gesture::Gesture;
use crate::hand::Skeleton;
use crate::Confidence;

/// One row of the classification cascade: a predicate over the finger
/// flags and the verdict it produces.
type Rule = (fn(&Fingers) -> bool, Option<Gesture>, Confidence);

/// What the classifier saw in one frame.
///
/// `gesture` is `None` when no hand was present or the pose was too
/// ambiguous to call; that is a normal outcome, not an error, and always
/// carries confidence 0. Confidence is a discrete rule-tier score so that
/// downstream consumers *can* threshold on it; the game itself treats any
/// `Some` gesture as actionable.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub struct Detection {
    gesture: Option<Gesture>,
    confidence: Confidence,
}

impl Detection {
    pub fn gesture(&self) -> Option<Gesture> {
        self.gesture
    }
    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    /// Classify a frame. An absent hand short-circuits to the empty
    /// detection without ever running the finger extractor.
    pub fn from_frame(skeleton: Option<&Skeleton>) -> Self {
        skeleton
            .map(Fingers::from)
            .map(|fingers| Self::from(&fingers))
            .unwrap_or_default()
    }

    /// The rule cascade, highest priority first. First match wins. The
    /// order is load-bearing: conditions overlap, and a row only fires
    /// when every row above it declined.
    ///
    /// A closed fist is unambiguous rock and a full spread unambiguous
    /// paper. The two-finger victory shape is scissors no matter what the
    /// thumb does. Three or four digits without a clear thumb still read
    /// as paper, at reduced confidence, since thumb detection gets noisy
    /// on an angled palm. A single digit is rejected rather than guessed.
    /// A bare thumb reads as a loosely closed rock.
    const CASCADE: [Rule; 7] = [
        (|f: &Fingers| f.extended() == 0 && !f.thumb(), Some(Gesture::Rock), 95),
        (|f: &Fingers| f.extended() >= 4 && f.thumb(), Some(Gesture::Paper), 95),
        (
            |f: &Fingers| f.extended() == 2 && f.index() && f.middle() && !f.ring() && !f.pinky(),
            Some(Gesture::Scissors),
            95,
        ),
        (|f: &Fingers| f.extended() >= 3 && !f.thumb(), Some(Gesture::Paper), 80),
        (|f: &Fingers| f.extended() == 1, None, 0),
        (|f: &Fingers| f.extended() == 0 && f.thumb(), Some(Gesture::Rock), 75),
        (|_: &Fingers| true, None, 0),
    ];
}

impl From<&Fingers> for Detection {
    fn from(fingers: &Fingers) -> Self {
        Self::CASCADE
            .iter()
            .find(|(matches, _, _)| matches(fingers))
            .map(|(_, gesture, confidence)| Self {
                gesture: *gesture,
                confidence: *confidence,
            })
            .unwrap_or_default() // the last row matches everything
    }
}

impl std::fmt::Display for Detection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.gesture {
            Some(gesture) => write!(f, "{} ({}%)", gesture, self.confidence),
            None => write!(f, "none"),
        }
    }
}
