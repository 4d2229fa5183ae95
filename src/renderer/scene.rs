//! Scene assembly
//!
//! Turns a `GameState` into one triangle list in canvas pixel space. World
//! geometry is shifted left by the camera offset; HUD and overlays are drawn
//! in screen space on top.

use glam::Vec2;
use std::f32::consts::PI;

use super::shapes::{arc_stroke, ellipse, rect, rounded_rect, triangle};
use super::vertex::{Vertex, palette};
use crate::config::{FlagConfig, GameConfig};
use crate::sim::{Cloud, GamePhase, GameState, Obstacle, ObstacleKind, Player};

/// Corner radius for the player's body and cactus segments
const CORNER_RADIUS: f32 = 5.0;
/// Flag pole height above the ground
const FLAG_HEIGHT: f32 = 100.0;
/// Progress bar placement (screen space)
const PROGRESS_BAR: (f32, f32, f32, f32) = (20.0, 80.0, 200.0, 10.0);

/// Build every vertex for the current frame
///
/// The sky is not included; it is the render pass clear color.
pub fn build_scene(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(2048);

    if state.phase == GamePhase::Start {
        // Title screen is sky plus DOM text
        return vertices;
    }

    let config = &state.config;
    let ground_y = config.ground_y();

    let world_start = vertices.len();
    for cloud in &state.clouds {
        vertices.extend(cloud_shape(cloud, config));
    }
    vertices.extend(ground(state.camera_x, config));
    vertices.extend(flag(config.world.player_start_x, ground_y, &config.flags.start));
    vertices.extend(flag(config.world.goal_distance, ground_y, &config.flags.goal));
    for obstacle in &state.obstacles {
        vertices.extend(obstacle_shape(obstacle, config));
    }
    vertices.extend(player_shape(&state.player, config));

    for v in &mut vertices[world_start..] {
        v.position[0] -= state.camera_x;
    }

    vertices.extend(progress_bar(state.progress()));

    let (w, h) = (config.world.canvas_width, config.world.canvas_height);
    match state.phase {
        GamePhase::GameOver => vertices.extend(rect(0.0, 0.0, w, h, palette::GAME_OVER_SHADE.to_linear())),
        GamePhase::Goal => vertices.extend(rect(0.0, 0.0, w, h, palette::GOAL_SHADE.to_linear())),
        GamePhase::Start | GamePhase::Playing => {}
    }

    vertices
}

/// Clear color for the render pass
pub fn sky_color(config: &GameConfig) -> wgpu::Color {
    let [r, g, b, a] = config.background.sky_color.to_linear();
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}

fn cloud_shape(cloud: &Cloud, config: &GameConfig) -> Vec<Vertex> {
    let color = config.background.cloud_color.to_linear();
    let s = cloud.size;
    let mut v = ellipse(cloud.pos, s, s * 0.6, color);
    for side in [-1.0, 1.0] {
        let puff = cloud.pos + Vec2::new(side * s * 0.3, s * 0.1);
        v.extend(ellipse(puff, s * 0.7, s * 0.5, color));
    }
    v
}

fn ground(camera_x: f32, config: &GameConfig) -> Vec<Vertex> {
    let ground_y = config.ground_y();
    let x = camera_x - 100.0;
    let w = config.world.canvas_width + 200.0;
    let mut v = rect(
        x,
        ground_y,
        w,
        config.world.canvas_height - ground_y,
        config.background.ground_color.to_linear(),
    );
    v.extend(rect(
        x,
        ground_y - 10.0,
        w,
        10.0,
        config.background.grass_color.to_linear(),
    ));
    v
}

fn flag(x: f32, ground_y: f32, flag: &FlagConfig) -> Vec<Vertex> {
    let top = ground_y - FLAG_HEIGHT;
    let mut v = rect(x - 5.0, top, 5.0, FLAG_HEIGHT, flag.pole_color.to_linear());
    v.extend(triangle(
        Vec2::new(x, top),
        Vec2::new(x, top + 40.0),
        Vec2::new(x + 50.0, top + 20.0),
        flag.flag_color.to_linear(),
    ));
    v
}

fn obstacle_shape(obstacle: &Obstacle, config: &GameConfig) -> Vec<Vertex> {
    let Vec2 { x, y } = obstacle.pos;
    match obstacle.kind {
        ObstacleKind::Cactus => {
            let color = config.obstacle.cactus_color.to_linear();
            let mut v = rounded_rect(x + 10.0, y, 10.0, obstacle.height, CORNER_RADIUS, color);
            v.extend(rounded_rect(x, y + 10.0, 10.0, 15.0, CORNER_RADIUS, color));
            v.extend(rounded_rect(x + 20.0, y + 15.0, 10.0, 10.0, CORNER_RADIUS, color));
            v
        }
        ObstacleKind::Rock => triangle(
            Vec2::new(x + obstacle.width / 2.0, y),
            Vec2::new(x, y + obstacle.height),
            Vec2::new(x + obstacle.width, y + obstacle.height),
            config.obstacle.rock_color.to_linear(),
        ),
    }
}

fn player_shape(player: &Player, config: &GameConfig) -> Vec<Vertex> {
    let origin = player.pos;
    let mut v = rounded_rect(
        origin.x,
        origin.y,
        player.width,
        player.height,
        CORNER_RADIUS,
        config.player.body_color.to_linear(),
    );

    for eye_x in [12.0, 28.0] {
        let eye = origin + Vec2::new(eye_x, 15.0);
        v.extend(ellipse(eye, 10.0, 10.0, config.player.eye_color.to_linear()));
        v.extend(ellipse(eye, 5.0, 5.0, config.player.pupil_color.to_linear()));
    }

    v.extend(arc_stroke(
        origin + Vec2::new(20.0, 30.0),
        15.0,
        10.0,
        0.0,
        PI,
        2.0,
        palette::OUTLINE.to_linear(),
        12,
    ));
    v
}

fn progress_bar(progress: f32) -> Vec<Vertex> {
    let (x, y, w, h) = PROGRESS_BAR;
    let mut v = rect(x, y, w, h, palette::PROGRESS_TRACK.to_linear());
    v.extend(rect(
        x,
        y,
        w * progress.clamp(0.0, 1.0),
        h,
        palette::PROGRESS_FILL.to_linear(),
    ));
    v
}
