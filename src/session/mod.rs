//! Session scoring and the cross-session leaderboard.
//!
//! The only shared mutable state in the crate. [`Session`] guards its
//! counters and [`Leaderboard`] behind one lock so every operation is an
//! indivisible read-modify-write; disk writes happen on a snapshot taken
//! after the lock is released.
mod leaderboard;
mod scores;
mod session;

pub use leaderboard::*;
pub use scores::*;
pub use session::*;
