//! CLI Interface: terminal front end over the core
//!
//! # Components
//! - `input.rs`: Keystroke capture using crossterm
//! - `display.rs`: Terminal rendering and text layout
//! - `game.rs`: Menu, play and summary loop

pub mod display;
pub mod game;
pub mod input;

pub use game::{Game, UiError};
