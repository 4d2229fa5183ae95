//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors that are not part of the game config
pub mod palette {
    use crate::config::Color;

    pub const OUTLINE: Color = Color::rgb(0, 0, 0);
    pub const PROGRESS_TRACK: Color = Color::rgb(100, 100, 100);
    pub const PROGRESS_FILL: Color = Color::rgb(100, 255, 100);
    pub const GAME_OVER_SHADE: Color = Color::rgba(0, 0, 0, 150);
    pub const GOAL_SHADE: Color = Color::rgba(255, 200, 50, 200);
    pub const GAME_OVER_TITLE: Color = Color::rgb(255, 100, 100);
    pub const GOAL_TITLE: Color = Color::rgb(255, 100, 0);
}
