//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, speeds in pixels per frame
//! - Seeded RNG only
//! - Input only through the command queue
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use collision::{Aabb, check_collision, first_hit};
pub use input::{InputCommand, InputQueue};
pub use state::{Cloud, GameEvent, GamePhase, GameState, Obstacle, ObstacleKind, Player};
pub use tick::{apply_command, cull_obstacles, step_player, tick};
