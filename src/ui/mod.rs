//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! Reads the carousel state and turns it into cells on the terminal.
//! Nothing here mutates state.

pub mod card;
pub mod layout;
pub mod placement;
pub mod screen;
pub mod stage;
pub mod theme;
pub mod transition;
