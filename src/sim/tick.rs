//! Per-frame simulation tick
//!
//! Drains queued input, then advances the world by one frame when playing.
//! There is no fixed timestep: one call per display refresh, and all speeds
//! in the config are per-frame quantities.

use super::collision::first_hit;
use super::input::{InputCommand, InputQueue};
use super::state::{GameEvent, GamePhase, GameState, Obstacle, ObstacleKind, Player};
use crate::config::GameConfig;

/// Advance the game by one frame
///
/// Returns the events that happened, in order.
pub fn tick(state: &mut GameState, input: &mut InputQueue) -> Vec<GameEvent> {
    let mut events = Vec::new();

    for command in input.drain() {
        apply_command(state, command, &mut events);
    }

    state.frame += 1;

    if state.phase == GamePhase::Playing {
        update_playing(state, &mut events);
    }

    events
}

/// Apply one input command immediately
pub fn apply_command(state: &mut GameState, command: InputCommand, events: &mut Vec<GameEvent>) {
    match command {
        InputCommand::SetLeft(held) => state.left_held = held,
        InputCommand::SetRight(held) => state.right_held = held,
        InputCommand::JumpTrigger => handle_jump(state, events),
    }
}

/// Jump trigger: starts the run, jumps, or resets after the run ended
fn handle_jump(state: &mut GameState, events: &mut Vec<GameEvent>) {
    match state.phase {
        GamePhase::Start => {
            state.phase = GamePhase::Playing;
            log::info!("Run started (seed {})", state.seed);
            events.push(GameEvent::Started);
        }
        GamePhase::Playing => {
            if state.player.jump(state.config.player.jump_power) {
                events.push(GameEvent::Jumped);
            }
        }
        GamePhase::GameOver | GamePhase::Goal => {
            state.reset();
            log::info!("Game reset");
            events.push(GameEvent::Reset);
        }
    }
}

fn update_playing(state: &mut GameState, events: &mut Vec<GameEvent>) {
    step_player(
        &mut state.player,
        state.left_held,
        state.right_held,
        &state.config,
    );
    state.camera_x = state.player.pos.x - state.config.camera_anchor();

    if state.frame % state.config.obstacle.spawn_interval == 0 {
        let kind = spawn_obstacle(state);
        events.push(GameEvent::ObstacleSpawned(kind));
    }

    cull_obstacles(state);

    // Goal is checked second so it wins a same-frame tie
    if first_hit(&state.player, &state.obstacles).is_some() {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::Crashed);
    }
    if state.player.pos.x >= state.config.world.goal_distance {
        state.phase = GamePhase::Goal;
        events.push(GameEvent::ReachedGoal);
    }

    state.score += 1;
    state.distance = state.player.pos.x - state.config.world.player_start_x;

    match state.phase {
        GamePhase::GameOver => log::info!(
            "Crashed at distance {:.0} (score {})",
            state.distance,
            state.score
        ),
        GamePhase::Goal => log::info!("Goal reached (score {})", state.score),
        _ => {}
    }
}

/// Integrate one frame of player motion
///
/// Left wins when both directions are held.
pub fn step_player(player: &mut Player, left: bool, right: bool, config: &GameConfig) {
    let speed = config.player.move_speed;
    player.vel.x = if left {
        -speed
    } else if right {
        speed
    } else {
        0.0
    };

    player.vel.y += config.player.gravity;
    player.pos += player.vel;

    let floor = config.ground_y() - player.height;
    if player.pos.y >= floor {
        player.pos.y = floor;
        player.vel.y = 0.0;
        player.jumping = false;
    }

    if player.pos.x < 0.0 {
        player.pos.x = 0.0;
    }
}

/// Spawn an obstacle just past the right edge of the viewport
fn spawn_obstacle(state: &mut GameState) -> ObstacleKind {
    let kind = state.roll_obstacle_kind();
    let x = state.camera_x + state.config.world.canvas_width + state.config.obstacle.spawn_lead;
    state.obstacles.push(Obstacle::new(kind, x, &state.config));
    log::debug!("Spawned {:?} at x={:.0} (frame {})", kind, x, state.frame);
    kind
}

/// Drop obstacles that fell too far behind the camera
///
/// Returns how many were removed.
pub fn cull_obstacles(state: &mut GameState) -> usize {
    let threshold = state.camera_x - state.config.obstacle.cull_margin;
    let before = state.obstacles.len();
    state.obstacles.retain(|o| o.pos.x >= threshold);
    let removed = before - state.obstacles.len();
    if removed > 0 {
        log::debug!("Culled {} obstacle(s) behind x={:.0}", removed, threshold);
    }
    removed
}
