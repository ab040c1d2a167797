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

    /// Vertex buffer layout for hosts that upload `frame()` output to a wgpu
    /// pipeline (location 0: position, location 1: color)
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

/// Colors for the scene
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [7.0 / 255.0, 15.0 / 255.0, 4.0 / 255.0, 1.0];
    pub const GRAPH_BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const GRAPH_BAR: [f32; 4] = [150.0 / 255.0, 150.0 / 255.0, 150.0 / 255.0, 1.0];
    pub const STAT_TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const INSTRUCTION_TEXT: [f32; 4] = [100.0 / 255.0, 100.0 / 255.0, 100.0 / 255.0, 1.0];

    /// Default stroke palette: red, sky blue, green, magenta, orange
    pub const PALETTE: [[f32; 4]; 5] = [
        [219.0 / 255.0, 33.0 / 255.0, 33.0 / 255.0, 1.0],
        [59.0 / 255.0, 185.0 / 255.0, 227.0 / 255.0, 1.0],
        [27.0 / 255.0, 222.0 / 255.0, 50.0 / 255.0, 1.0],
        [230.0 / 255.0, 55.0 / 255.0, 230.0 / 255.0, 1.0],
        [1.0, 153.0 / 255.0, 0.0, 1.0],
    ];
}
