//! Application orchestration — state, terminal session, event loop input.

pub mod event;
pub mod handler;
pub mod state;
pub mod terminal;
