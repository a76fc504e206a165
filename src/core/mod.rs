//! Core logic — carousel state, gesture interpretation, and card decks.
//!
//! Nothing in here touches the terminal.

pub mod carousel;
pub mod deck;
pub mod gesture;
