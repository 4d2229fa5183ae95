//! Side Runner - a side-scrolling run-and-jump game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, obstacles, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline and DOM HUD view model
//! - `platform`: Browser input mapping
//! - `config`: Data-driven level and palette parameters

pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use sim::{GamePhase, GameState, InputCommand, InputQueue, tick};
