//! Game-state engine for a timed, square-grid mine sweeping puzzle.
//!
//! The embedding UI and the timer driver call into a [`Session`]; every call runs to completion
//! and reports what changed.

pub use adjacency::*;
pub use board::*;
pub use config::*;
pub use error::*;
pub use flags::*;
pub use reveal::*;
pub use session::*;
pub use tile::*;
pub use types::*;

mod adjacency;
mod board;
mod config;
mod error;
mod flags;
mod reveal;
mod session;
mod tile;
mod types;

/// Creates a randomly laid out session, failing unless `0 < mine_count < size²` and
/// `time_budget > 0`.
pub fn create_session(size: Coord, mine_count: CellCount, time_budget: u32) -> Result<Session> {
    Session::new(SessionConfig::new(size, mine_count, time_budget)?)
}
