//! The game aggregate and the loop that plays it.
//!
//! [`GameBuilder`] produces a [`Game`] in its starting position. From there
//! either drive it round by round with [`Game::play_round`] or call the
//! rule operations directly.

mod setup;
mod state;
mod turn;
mod win;

pub use setup::{DeckSpec, EdgeCount, GameBuilder};
pub use state::{Game, GameStats};
pub use win::{GameOutcome, WinType};
