use crate::gesture::Gesture;
use crate::Arbitrary;

/// Source of the house move for a round.
///
/// The player's gesture is already committed when `choose` runs, so a
/// strategy may observe it. Strategies are selected by explicit
/// construction only; there is no ambient mode toggle.
pub trait Opponent {
    /// Choose the house countermove for this round.
    fn choose(&mut self, player: Gesture) -> Gesture;
}

/// Uniform random over the three shapes. The production default.
#[derive(Debug, Default, Clone, Copy)]
pub struct Chaos;

impl Opponent for Chaos {
    fn choose(&mut self, _: Gesture) -> Gesture {
        Gesture::random()
    }
}

/// Copies the player's move, forcing a draw every round. Exists so tests
/// and demos can reproduce outcomes deterministically.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mirror;

impl Opponent for Mirror {
    fn choose(&mut self, player: Gesture) -> Gesture {
        player
    }
}

/// Always plays one fixed shape.
#[derive(Debug, Clone, Copy)]
pub struct Fixed(pub Gesture);

impl Opponent for Fixed {
    fn choose(&mut self, _: Gesture) -> Gesture {
        self.0
    }
}
