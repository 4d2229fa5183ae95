//! Game configuration
//!
//! Every tunable number and color lives here. Defaults reproduce the stock
//! level; a JSON document can override any subset of fields. The config is
//! read once at startup and never mutated afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color as authored in the config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Linear-space color for an sRGB render target
    pub fn to_linear(self) -> [f32; 4] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
            self.a as f32 / 255.0,
        ]
    }
}

fn srgb_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Width/height pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub body_color: Color,
    pub eye_color: Color,
    pub pupil_color: Color,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity applied on jump (negative = up)
    pub jump_power: f32,
    pub move_speed: f32,
    /// Added to vertical velocity every tick
    pub gravity: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            body_color: Color::rgb(255, 100, 100),
            eye_color: Color::rgb(255, 255, 255),
            pupil_color: Color::rgb(0, 0, 0),
            width: 40.0,
            height: 50.0,
            jump_power: -16.0,
            move_speed: 5.0,
            gravity: 0.8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig {
    pub cactus_color: Color,
    pub cactus_size: Size,
    pub rock_color: Color,
    pub rock_size: Size,
    /// Frames between spawns
    pub spawn_interval: u64,
    /// Spawn distance past the right edge of the viewport
    pub spawn_lead: f32,
    /// Obstacles further than this behind the camera are culled
    pub cull_margin: f32,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            cactus_color: Color::rgb(34, 139, 34),
            cactus_size: Size::new(30.0, 40.0),
            rock_color: Color::rgb(128, 128, 128),
            rock_size: Size::new(40.0, 30.0),
            spawn_interval: 90,
            spawn_lead: 100.0,
            cull_margin: 200.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub sky_color: Color,
    pub cloud_color: Color,
    pub ground_color: Color,
    pub grass_color: Color,
    pub cloud_count: usize,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            sky_color: Color::rgb(135, 206, 235),
            cloud_color: Color::rgba(255, 255, 255, 200),
            ground_color: Color::rgb(101, 67, 33),
            grass_color: Color::rgb(34, 139, 34),
            cloud_count: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Depth of the ground band at the bottom of the canvas
    pub ground_height: f32,
    pub goal_distance: f32,
    pub player_start_x: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            ground_height: 100.0,
            goal_distance: 3000.0,
            player_start_x: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagConfig {
    pub pole_color: Color,
    pub flag_color: Color,
    pub text: String,
}

impl Default for FlagConfig {
    fn default() -> Self {
        Self {
            pole_color: Color::rgb(100, 50, 0),
            flag_color: Color::rgb(100, 200, 100),
            text: "START".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagsConfig {
    pub start: FlagConfig,
    pub goal: FlagConfig,
}

impl Default for FlagsConfig {
    fn default() -> Self {
        Self {
            start: FlagConfig::default(),
            goal: FlagConfig {
                flag_color: Color::rgb(255, 200, 50),
                text: "GOAL!".to_string(),
                ..FlagConfig::default()
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub score_color: Color,
    pub score_size: f32,
    pub distance_color: Color,
    pub distance_size: f32,
    pub title_color: Color,
    pub title_size: f32,
    pub message_color: Color,
    pub message_size: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        let white = Color::rgb(255, 255, 255);
        Self {
            score_color: white,
            score_size: 32.0,
            distance_color: white,
            distance_size: 24.0,
            title_color: white,
            title_size: 48.0,
            message_color: white,
            message_size: 24.0,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player: PlayerConfig,
    pub obstacle: ObstacleConfig,
    pub background: BackgroundConfig,
    pub world: WorldConfig,
    pub flags: FlagsConfig,
    pub ui: UiConfig,
}

impl GameConfig {
    /// Parse a (possibly partial) JSON override and validate the result
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the numbers describe a playable level
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.player;
        positive("player.width", p.width)?;
        positive("player.height", p.height)?;
        positive("player.move_speed", p.move_speed)?;
        positive("player.gravity", p.gravity)?;
        if !(p.jump_power < 0.0) {
            return Err(ConfigError::invalid("player.jump_power", "must be negative (upward)"));
        }

        let o = &self.obstacle;
        positive("obstacle.cactus_size.width", o.cactus_size.width)?;
        positive("obstacle.cactus_size.height", o.cactus_size.height)?;
        positive("obstacle.rock_size.width", o.rock_size.width)?;
        positive("obstacle.rock_size.height", o.rock_size.height)?;
        if o.spawn_interval == 0 {
            return Err(ConfigError::invalid("obstacle.spawn_interval", "must be at least 1"));
        }
        non_negative("obstacle.spawn_lead", o.spawn_lead)?;
        non_negative("obstacle.cull_margin", o.cull_margin)?;

        let w = &self.world;
        positive("world.canvas_width", w.canvas_width)?;
        positive("world.canvas_height", w.canvas_height)?;
        if !(w.ground_height > 0.0 && w.ground_height < w.canvas_height) {
            return Err(ConfigError::invalid("world.ground_height", "must lie inside the canvas"));
        }
        non_negative("world.player_start_x", w.player_start_x)?;
        if !(w.goal_distance > w.player_start_x) {
            return Err(ConfigError::invalid(
                "world.goal_distance",
                "must be greater than world.player_start_x",
            ));
        }

        Ok(())
    }

    /// Screen y of the ground surface
    pub fn ground_y(&self) -> f32 {
        self.world.canvas_height - self.world.ground_height
    }

    /// Distance from the camera's left edge to the player
    pub fn camera_anchor(&self) -> f32 {
        self.world.canvas_width / 4.0
    }

    /// Collision size of an obstacle variant
    pub fn obstacle_size(&self, kind: crate::sim::ObstacleKind) -> Size {
        match kind {
            crate::sim::ObstacleKind::Cactus => self.obstacle.cactus_size,
            crate::sim::ObstacleKind::Rock => self.obstacle.rock_size,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, "must be positive"))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, "must not be negative"))
    }
}

/// Why a config document was rejected
#[derive(Debug)]
pub enum ConfigError {
    /// Not valid JSON, or fields of the wrong type
    Parse(serde_json::Error),
    /// Parsed fine but describes an unplayable level
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: &'static str) -> Self {
        ConfigError::Invalid { field, reason }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "config parse error: {}", e),
            ConfigError::Invalid { field, reason } => {
                write!(f, "invalid config value `{}`: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ground_y(), 500.0);
        assert_eq!(config.camera_anchor(), 200.0);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = GameConfig::from_json(
            r#"{ "player": { "move_speed": 7.5 }, "world": { "goal_distance": 5000 } }"#,
        )
        .unwrap();
        assert_eq!(config.player.move_speed, 7.5);
        assert_eq!(config.player.gravity, 0.8);
        assert_eq!(config.world.goal_distance, 5000.0);
        assert_eq!(config.obstacle.spawn_interval, 90);
    }

    #[test]
    fn test_color_alpha_defaults_to_opaque() {
        let config =
            GameConfig::from_json(r#"{ "background": { "sky_color": { "r": 1, "g": 2, "b": 3 } } }"#)
                .unwrap();
        assert_eq!(config.background.sky_color, Color::rgba(1, 2, 3, 255));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = GameConfig::from_json("{ player: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_zero_spawn_interval_rejected() {
        let err = GameConfig::from_json(r#"{ "obstacle": { "spawn_interval": 0 } }"#).unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "obstacle.spawn_interval"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_upward_gravity_and_downward_jump_rejected() {
        let mut config = GameConfig::default();
        config.player.gravity = -0.8;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.player.jump_power = 16.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("player.jump_power"));
    }

    #[test]
    fn test_goal_behind_start_rejected() {
        let mut config = GameConfig::default();
        config.world.goal_distance = 50.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_srgb_conversion_endpoints() {
        assert_eq!(Color::rgb(0, 0, 0).to_linear(), [0.0, 0.0, 0.0, 1.0]);
        let white = Color::rgba(255, 255, 255, 0).to_linear();
        assert!((white[0] - 1.0).abs() < 1e-6);
        assert_eq!(white[3], 0.0);
    }
}
