//! Game state and core simulation types
//!
//! `GameState` is the single owned world: the tick function is its only
//! writer and the renderer reads it after each tick.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Aabb;
use crate::config::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for the first jump trigger
    Start,
    /// Active run
    Playing,
    /// Hit an obstacle
    GameOver,
    /// Reached the goal distance
    Goal,
}

impl GamePhase {
    /// Terminal phases only leave through a reset
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Goal)
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    Jumped,
    ObstacleSpawned(ObstacleKind),
    Crashed,
    ReachedGoal,
    Reset,
}

/// The player character
///
/// `pos.x` is the world x; `pos.y` is the screen y of the top edge, since
/// the level never scrolls vertically.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    /// Airborne after a jump; blocks further jumps until landing
    pub jumping: bool,
}

impl Player {
    /// Player standing on the ground at the start line
    pub fn at_start(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(
                config.world.player_start_x,
                config.ground_y() - config.player.height,
            ),
            vel: Vec2::ZERO,
            width: config.player.width,
            height: config.player.height,
            jumping: false,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    /// Apply the jump impulse unless already airborne
    ///
    /// Returns whether the jump happened.
    pub fn jump(&mut self, jump_power: f32) -> bool {
        if self.jumping {
            return false;
        }
        self.vel.y = jump_power;
        self.jumping = true;
        true
    }
}

/// Obstacle variants; they draw differently but collide the same
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Cactus,
    Rock,
}

/// An obstacle resting on the ground
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    /// Obstacle of the given kind standing on the ground at world x
    pub fn new(kind: ObstacleKind, x: f32, config: &GameConfig) -> Self {
        let size = config.obstacle_size(kind);
        Self {
            kind,
            pos: Vec2::new(x, config.ground_y() - size.height),
            width: size.width,
            height: size.height,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

/// Background cloud (decoration only)
#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub pos: Vec2,
    pub size: f32,
}

/// Complete world state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Read-only level parameters
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub phase: GamePhase,
    /// Host frame counter; advances in every phase and survives resets
    pub frame: u64,
    /// Ticks spent playing this run
    pub score: u64,
    /// World x travelled from the start line
    pub distance: f32,
    /// World x of the viewport's left edge
    pub camera_x: f32,
    pub player: Player,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub clouds: Vec<Cloud>,
    /// Held direction inputs
    pub left_held: bool,
    pub right_held: bool,
}

impl GameState {
    /// Create a new game state with the given config and seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let clouds = generate_clouds(&mut rng, &config);
        let player = Player::at_start(&config);

        Self {
            config,
            seed,
            rng,
            phase: GamePhase::Start,
            frame: 0,
            score: 0,
            distance: 0.0,
            camera_x: 0.0,
            player,
            obstacles: Vec::new(),
            clouds,
            left_held: false,
            right_held: false,
        }
    }

    /// Put the run back on the title screen
    ///
    /// Clouds, held inputs and the frame counter are left alone.
    pub fn reset(&mut self) {
        self.player = Player::at_start(&self.config);
        self.obstacles.clear();
        self.score = 0;
        self.distance = 0.0;
        self.camera_x = 0.0;
        self.phase = GamePhase::Start;
    }

    /// Pick an obstacle variant with even odds
    pub fn roll_obstacle_kind(&mut self) -> ObstacleKind {
        if self.rng.random::<f32>() > 0.5 {
            ObstacleKind::Cactus
        } else {
            ObstacleKind::Rock
        }
    }

    /// Fraction of the course covered, unclamped
    pub fn progress(&self) -> f32 {
        self.distance / self.config.world.goal_distance
    }
}

fn generate_clouds(rng: &mut Pcg32, config: &GameConfig) -> Vec<Cloud> {
    (0..config.background.cloud_count)
        .map(|_| Cloud {
            pos: Vec2::new(
                rng.random_range(0.0..config.world.canvas_width * 2.0),
                rng.random_range(50.0..150.0),
            ),
            size: rng.random_range(60.0..100.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_on_title_screen() {
        let state = GameState::new(GameConfig::default(), 1);
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.player.pos, Vec2::new(100.0, 450.0));
        assert!(!state.player.jumping);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.clouds.len(), 5);
    }

    #[test]
    fn test_clouds_in_range_and_seeded() {
        let a = GameState::new(GameConfig::default(), 42);
        let b = GameState::new(GameConfig::default(), 42);
        assert_eq!(a.clouds, b.clouds);
        for cloud in &a.clouds {
            assert!((0.0..1600.0).contains(&cloud.pos.x));
            assert!((50.0..150.0).contains(&cloud.pos.y));
            assert!((60.0..100.0).contains(&cloud.size));
        }
    }

    #[test]
    fn test_jump_only_from_ground() {
        let mut player = Player::at_start(&GameConfig::default());
        assert!(player.jump(-16.0));
        assert_eq!(player.vel.y, -16.0);

        player.vel.y = -3.0;
        assert!(!player.jump(-16.0));
        assert_eq!(player.vel.y, -3.0);
    }

    #[test]
    fn test_obstacles_rest_on_ground() {
        let config = GameConfig::default();
        let cactus = Obstacle::new(ObstacleKind::Cactus, 900.0, &config);
        let rock = Obstacle::new(ObstacleKind::Rock, 900.0, &config);
        assert_eq!(cactus.bounds().bottom(), config.ground_y());
        assert_eq!(rock.bounds().bottom(), config.ground_y());
        assert_eq!((rock.width, rock.height), (40.0, 30.0));
    }

    #[test]
    fn test_reset_clears_run_but_keeps_frame() {
        let mut state = GameState::new(GameConfig::default(), 7);
        let clouds = state.clouds.clone();
        state.phase = GamePhase::GameOver;
        state.frame = 321;
        state.score = 99;
        state.distance = 450.0;
        state.camera_x = 350.0;
        state.player.pos.x = 550.0;
        state.player.jumping = true;
        state.obstacles.push(Obstacle::new(ObstacleKind::Rock, 600.0, &state.config));

        state.reset();

        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.score, 0);
        assert_eq!(state.distance, 0.0);
        assert_eq!(state.camera_x, 0.0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.player, Player::at_start(&state.config));
        assert_eq!(state.frame, 321);
        assert_eq!(state.clouds, clouds);
    }

    #[test]
    fn test_obstacle_kinds_both_occur() {
        let mut state = GameState::new(GameConfig::default(), 2024);
        let kinds: Vec<_> = (0..64).map(|_| state.roll_obstacle_kind()).collect();
        assert!(kinds.contains(&ObstacleKind::Cactus));
        assert!(kinds.contains(&ObstacleKind::Rock));
    }
}
