//! Game rules: move legality, win detection, and draw detection.
//!
//! Every function here is a pure read of the board; the engine is the
//! only caller that acts on the answers.

mod draw;
mod legal;
mod win;

pub use draw::is_full;
pub use legal::is_legal;
pub use win::find_winner;
