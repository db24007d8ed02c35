//! CLI infrastructure for the noughts game
//!
//! This module provides the terminal front end: an interactive game and a
//! batch simulator for the computer opponent.

pub mod commands;
pub mod output;
