//! Gesture classification.
//!
//! The decision core of the crate: turn a [`Skeleton`](crate::hand::Skeleton)
//! into a [`Detection`] via two stages with no shared state and no failure
//! path. [`Fingers`] derives five extension flags from distance-ratio
//! heuristics; [`Detection`] runs the flags through a priority-ordered rule
//! cascade whose conditions deliberately overlap. Every frame is classified
//! independently; there is no temporal smoothing.
mod classify;
mod fingers;
mod gesture;

pub use classify::*;
pub use fingers::*;
pub use gesture::*;
