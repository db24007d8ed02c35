//! Application layer: configuration and the objects built from it.

pub mod config;

pub use config::{GameConfig, MAX_COMPUTER_DELAY_MS};
