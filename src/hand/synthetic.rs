//! Canonical synthetic hand poses.
//!
//! Stand-ins for the external pose estimator: each builder returns a
//! [`Skeleton`] whose geometry lands cleanly on one side of the extension
//! heuristics. Used by the arcade binary when no recorded frames are given,
//! by benchmarks, and by tests. The hand is upright with the wrist at the
//! bottom of the frame.

use super::joint::JOINT_COUNT;
use super::point::Landmark;
use super::skeleton::Skeleton;
use crate::gesture::Gesture;
use crate::Coordinate;

const WRIST: (Coordinate, Coordinate) = (0.50, 0.90);

/// Closed fist: nothing extended.
pub fn fist() -> Skeleton {
    assemble([false, false, false, false, false])
}

/// Open hand, thumb out: everything extended.
pub fn palm() -> Skeleton {
    assemble([true, true, true, true, true])
}

/// Victory sign: index and middle extended, the rest folded.
pub fn victory() -> Skeleton {
    assemble([false, true, true, false, false])
}

/// Three-finger spread with the thumb tucked; reads as paper at reduced confidence.
pub fn splay() -> Skeleton {
    assemble([false, true, true, true, false])
}

/// Thumb alone sticking out of a loose fist.
pub fn thumbs() -> Skeleton {
    assemble([true, false, false, false, false])
}

/// Index finger alone; deliberately ambiguous.
pub fn point() -> Skeleton {
    assemble([false, true, false, false, false])
}

/// The unambiguous pose for a gesture.
pub fn pose(gesture: Gesture) -> Skeleton {
    match gesture {
        Gesture::Rock => fist(),
        Gesture::Paper => palm(),
        Gesture::Scissors => victory(),
    }
}

/// Lay out the five digit chains around the wrist. Flags run thumb first,
/// then index through pinky.
fn assemble(flags: [bool; 5]) -> Skeleton {
    let [thumb, index, middle, ring, pinky] = flags;
    let mut landmarks = [Landmark::default(); JOINT_COUNT];
    landmarks[0] = Landmark::from(WRIST);
    landmarks[1..5].copy_from_slice(&thumb_chain(thumb));
    landmarks[5..9].copy_from_slice(&digit_chain(0.42, index));
    landmarks[9..13].copy_from_slice(&digit_chain(0.47, middle));
    landmarks[13..17].copy_from_slice(&digit_chain(0.52, ring));
    landmarks[17..21].copy_from_slice(&digit_chain(0.57, pinky));
    Skeleton::from(landmarks)
}

/// MCP/PIP/DIP/TIP for a non-thumb digit in a vertical column at `x`.
/// Extended runs the tip well above the PIP; curled tucks it back below.
fn digit_chain(x: Coordinate, extended: bool) -> [Landmark; 4] {
    match extended {
        true => [(x, 0.60), (x, 0.50), (x, 0.40), (x, 0.30)].map(Landmark::from),
        false => [(x, 0.60), (x, 0.55), (x, 0.58), (x, 0.62)].map(Landmark::from),
    }
}

/// CMC/MCP/IP/TIP for the thumb. Extended sweeps wide of the wrist;
/// folded curls the tip back inside the IP joint's wrist distance.
fn thumb_chain(extended: bool) -> [Landmark; 4] {
    match extended {
        true => [(0.44, 0.82), (0.38, 0.76), (0.33, 0.70), (0.28, 0.64)].map(Landmark::from),
        false => [(0.46, 0.82), (0.42, 0.78), (0.44, 0.70), (0.48, 0.72)].map(Landmark::from),
    }
}
