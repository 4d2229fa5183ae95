//! HUD view model
//!
//! Text is drawn by the DOM, not the GPU. This module decides what the text
//! says and where flag captions sit; the wasm driver copies it into elements.

use crate::config::{Color, GameConfig};
use crate::sim::{GamePhase, GameState};

/// Centered message screen shown over the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub phase: GamePhase,
    pub title: &'static str,
    pub lines: Vec<String>,
}

/// Caption under a flag, in screen space
#[derive(Debug, Clone, PartialEq)]
pub struct FlagCaption {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub visible: bool,
}

/// Everything the DOM overlay shows for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct HudView {
    /// Score and distance are hidden on the title screen
    pub show_stats: bool,
    pub score: String,
    pub distance: String,
    pub banner: Option<Banner>,
    pub flags: [FlagCaption; 2],
}

impl HudView {
    pub fn from_state(state: &GameState) -> Self {
        let config = &state.config;
        let distance_m = state.distance.floor();

        let banner = match state.phase {
            GamePhase::Start => Some(Banner {
                phase: GamePhase::Start,
                title: "Side Runner",
                lines: vec![
                    "Reach the goal!".to_string(),
                    "Don't touch the obstacles!".to_string(),
                    "Tap or press Space to start".to_string(),
                ],
            }),
            GamePhase::Playing => None,
            GamePhase::GameOver => Some(Banner {
                phase: GamePhase::GameOver,
                title: "Game Over",
                lines: vec![
                    format!("Distance: {:.0}m", distance_m),
                    format!("Score: {}", state.score),
                    "Tap or press Space to restart".to_string(),
                ],
            }),
            GamePhase::Goal => Some(Banner {
                phase: GamePhase::Goal,
                title: "Goal!",
                lines: vec![
                    "Congratulations!".to_string(),
                    format!("Score: {}", state.score),
                    "Tap or press Space to restart".to_string(),
                ],
            }),
        };

        let show_stats = state.phase != GamePhase::Start;
        let caption = |world_x: f32, text: &str| {
            let x = world_x + 25.0 - state.camera_x;
            FlagCaption {
                text: text.to_string(),
                x,
                y: config.ground_y() - 75.0,
                visible: show_stats && (0.0..=config.world.canvas_width).contains(&x),
            }
        };

        Self {
            show_stats,
            score: format!("Score: {}", state.score),
            distance: format!(
                "Distance: {:.0} / {:.0}m",
                distance_m, config.world.goal_distance
            ),
            banner,
            flags: [
                caption(config.world.player_start_x, &config.flags.start.text),
                caption(config.world.goal_distance, &config.flags.goal.text),
            ],
        }
    }
}

/// CSS color string for DOM styling
pub fn css_color(color: Color) -> String {
    format!(
        "rgba({}, {}, {}, {:.3})",
        color.r,
        color.g,
        color.b,
        color.a as f32 / 255.0
    )
}

/// Title color for a banner, from the UI config or the fixed end-screen colors
pub fn banner_title_color(phase: GamePhase, config: &GameConfig) -> Color {
    use super::vertex::palette;
    match phase {
        GamePhase::GameOver => palette::GAME_OVER_TITLE,
        GamePhase::Goal => palette::GOAL_TITLE,
        GamePhase::Start | GamePhase::Playing => config.ui.title_color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_screen() {
        let state = GameState::new(GameConfig::default(), 1);
        let hud = HudView::from_state(&state);
        assert!(!hud.show_stats);
        let banner = hud.banner.unwrap();
        assert_eq!(banner.phase, GamePhase::Start);
        assert!(hud.flags.iter().all(|f| !f.visible));
    }

    #[test]
    fn test_playing_labels() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.phase = GamePhase::Playing;
        state.score = 42;
        state.distance = 123.9;
        state.camera_x = 23.0;
        let hud = HudView::from_state(&state);
        assert!(hud.banner.is_none());
        assert_eq!(hud.score, "Score: 42");
        assert_eq!(hud.distance, "Distance: 123 / 3000m");

        let [start, goal] = &hud.flags;
        assert_eq!(start.text, "START");
        assert_eq!(start.x, 102.0);
        assert_eq!(start.y, 425.0);
        assert!(start.visible);
        assert!(!goal.visible);
    }

    #[test]
    fn test_game_over_banner_reports_run() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.phase = GamePhase::GameOver;
        state.score = 250;
        state.distance = 640.0;
        let banner = HudView::from_state(&state).banner.unwrap();
        assert_eq!(banner.title, "Game Over");
        assert_eq!(banner.lines[0], "Distance: 640m");
        assert_eq!(banner.lines[1], "Score: 250");
    }

    #[test]
    fn test_css_color() {
        assert_eq!(css_color(Color::rgba(255, 200, 50, 255)), "rgba(255, 200, 50, 1.000)");
        assert_eq!(
            banner_title_color(GamePhase::Start, &GameConfig::default()),
            Color::rgb(255, 255, 255)
        );
    }
}
