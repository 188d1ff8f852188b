//! Courtside client library modules.

pub mod cli;
pub mod courtside;
pub mod domain;
pub mod models;
pub mod outbound;
pub mod settings;

/// Assembled client wiring the auth context, gateway, and controller.
pub use courtside::Courtside;
