//! Idle/demo mode: a simple bot that runs right and hops obstacles

use super::input::InputCommand;
use super::state::{GamePhase, GameState};

/// Default distance ahead of the player's right edge that triggers a jump
pub const DEFAULT_LOOKAHEAD: f32 = 40.0;

/// Stateless bot that turns the current world into input commands
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Jump when the nearest obstacle ahead is at most this far away
    pub lookahead: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            lookahead: DEFAULT_LOOKAHEAD,
        }
    }
}

impl Autopilot {
    /// Commands for the next tick
    pub fn commands(&self, state: &GameState) -> Vec<InputCommand> {
        match state.phase {
            GamePhase::Start => vec![InputCommand::JumpTrigger],
            GamePhase::Playing => {
                let mut commands = Vec::with_capacity(3);
                if state.left_held {
                    commands.push(InputCommand::SetLeft(false));
                }
                if !state.right_held {
                    commands.push(InputCommand::SetRight(true));
                }
                if !state.player.jumping && self.obstacle_ahead(state) {
                    commands.push(InputCommand::JumpTrigger);
                }
                commands
            }
            GamePhase::GameOver | GamePhase::Goal => Vec::new(),
        }
    }

    /// Gap from the player's right edge to the nearest obstacle in front
    pub fn nearest_gap(state: &GameState) -> Option<f32> {
        let right = state.player.bounds().right();
        state
            .obstacles
            .iter()
            .map(|o| o.pos.x - right)
            .filter(|gap| *gap > 0.0)
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    fn obstacle_ahead(&self, state: &GameState) -> bool {
        Self::nearest_gap(state).is_some_and(|gap| gap <= self.lookahead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::input::InputQueue;
    use crate::sim::state::{GameEvent, Obstacle, ObstacleKind};
    use crate::sim::tick;

    #[test]
    fn test_starts_the_run() {
        let state = GameState::new(GameConfig::default(), 1);
        assert_eq!(
            Autopilot::default().commands(&state),
            vec![InputCommand::JumpTrigger]
        );
    }

    #[test]
    fn test_idle_after_run_ends() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.phase = GamePhase::GameOver;
        assert!(Autopilot::default().commands(&state).is_empty());
    }

    #[test]
    fn test_jumps_only_when_close() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.phase = GamePhase::Playing;
        state.right_held = true;
        let pilot = Autopilot::default();

        let far = Obstacle::new(ObstacleKind::Rock, 300.0, &state.config);
        state.obstacles.push(far);
        assert!(pilot.commands(&state).is_empty());

        // Player right edge is at 140
        state.obstacles[0].pos.x = 180.0;
        assert_eq!(pilot.commands(&state), vec![InputCommand::JumpTrigger]);

        state.player.jumping = true;
        assert!(pilot.commands(&state).is_empty());
    }

    #[test]
    fn test_ignores_obstacles_behind() {
        let mut state = GameState::new(GameConfig::default(), 1);
        let behind = Obstacle::new(ObstacleKind::Cactus, 20.0, &state.config);
        state.obstacles.push(behind);
        assert_eq!(Autopilot::nearest_gap(&state), None);
    }

    #[test]
    fn test_autopilot_reaches_goal() {
        for seed in [1, 2, 3] {
            let mut state = GameState::new(GameConfig::default(), seed);
            let pilot = Autopilot::default();
            let mut input = InputQueue::new();
            let mut spawned = 0;

            for _ in 0..2000 {
                input.extend(pilot.commands(&state));
                for event in tick(&mut state, &mut input) {
                    if matches!(event, GameEvent::ObstacleSpawned(_)) {
                        spawned += 1;
                    }
                }
                if state.phase.is_terminal() {
                    break;
                }
            }

            assert_eq!(state.phase, GamePhase::Goal, "seed {seed}");
            assert!(spawned > 0);
        }
    }
}
