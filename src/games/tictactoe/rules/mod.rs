//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Nothing here mutates its
//! input or remembers anything between calls.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, WINNING_LINES, Win, check_winner};
