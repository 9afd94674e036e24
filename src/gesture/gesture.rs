use crate::Arbitrary;
use serde::Deserialize;
use serde::Serialize;

/// One of the three playable hand shapes.
///
/// Standard cyclic dominance: rock beats scissors, scissors beats paper,
/// paper beats rock. "No gesture detected" is not a shape — it lives as
/// `Option::None` on [`Detection`](super::Detection), so anything holding a
/// bare `Gesture` is playable by construction.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
}

impl Gesture {
    /// All three shapes in canonical order.
    pub const fn all() -> [Gesture; 3] {
        [Self::Rock, Self::Paper, Self::Scissors]
    }
    /// Whether this shape wins against the other under cyclic dominance.
    pub fn beats(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Rock, Self::Scissors) | (Self::Scissors, Self::Paper) | (Self::Paper, Self::Rock)
        )
    }
}

impl TryFrom<&str> for Gesture {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Self::Rock),
            "paper" => Ok(Self::Paper),
            "scissors" => Ok(Self::Scissors),
            x => Err(format!("unknown gesture: {}", x)),
        }
    }
}

impl Arbitrary for Gesture {
    fn random() -> Self {
        match rand::random_range(0..3) {
            0 => Self::Rock,
            1 => Self::Paper,
            _ => Self::Scissors,
        }
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "rock"),
            Self::Paper => write!(f, "paper"),
            Self::Scissors => write!(f, "scissors"),
        }
    }
}
