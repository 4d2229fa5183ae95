//! WebGPU rendering module
//!
//! The scene is tessellated on the CPU into one colored triangle list per
//! frame; text goes through the DOM HUD.

pub mod hud;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use hud::HudView;
pub use pipeline::RenderState;
pub use scene::{build_scene, sky_color};
pub use vertex::Vertex;
