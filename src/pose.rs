//! Camera pose handed to the renderer, plus its GPU uniform layout.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

pub const DEFAULT_FOV_DEGREES: f32 = 45.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;

/// Eye, target and up vector for a look-at camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl CameraPose {
    pub fn new(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        Self { eye, target, up }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn projection_matrix(aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(
            DEFAULT_FOV_DEGREES.to_radians(),
            aspect_ratio,
            NEAR_PLANE,
            FAR_PLANE,
        )
    }

    pub fn view_projection(&self, aspect_ratio: f32) -> Mat4 {
        Self::projection_matrix(aspect_ratio) * self.view_matrix()
    }
}

/// Uniform block for shaders (80 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_projection: [[f32; 4]; 4],
    pub eye: [f32; 4], // xyz + padding
}

impl CameraUniform {
    pub fn new(pose: &CameraPose, aspect_ratio: f32) -> Self {
        Self {
            view_projection: pose.view_projection(aspect_ratio).to_cols_array_2d(),
            eye: pose.eye.extend(0.0).to_array(),
        }
    }
}
