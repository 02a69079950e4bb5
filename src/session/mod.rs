//! Session lifecycle: configuration gating, frozen baselines and trial commits

/// Session state machine
pub mod controller;

pub use controller::{SessionController, SessionState};
