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

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const PLAYER: [f32; 4] = [0.13, 0.83, 0.93, 1.0]; // Cyan hull
    pub const PLAYER_COCKPIT: [f32; 4] = [0.93, 0.98, 1.0, 1.0];
    pub const ENEMY: [f32; 4] = [0.95, 0.27, 0.45, 1.0]; // Pink-red
    pub const ENEMY_EYES: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const PLAYER_BULLET: [f32; 4] = [0.99, 0.88, 0.28, 1.0]; // Yellow
    pub const ENEMY_BULLET: [f32; 4] = [0.98, 0.45, 0.09, 1.0]; // Orange
}
