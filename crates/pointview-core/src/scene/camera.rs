use serde::{Deserialize, Serialize};

use crate::consts::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_POSITION};

/// Screen-space rectangle the scene is drawn into, in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenRect {
    pub min: [f32; 2],
    pub size: [f32; 2],
}

impl ScreenRect {
    pub fn new(min: [f32; 2], size: [f32; 2]) -> Self {
        Self { min, size }
    }

    pub fn center(&self) -> [f32; 2] {
        [
            self.min[0] + self.size[0] / 2.0,
            self.min[1] + self.size[1] / 2.0,
        ]
    }
}

/// Perspective camera looking down -Z.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: CAMERA_POSITION,
            fov_deg: CAMERA_FOV_DEG,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }
}

impl Camera {
    /// Distance along the view axis, or `None` outside the clip range.
    fn view_depth(&self, world: [f32; 3]) -> Option<f32> {
        let depth = self.position[2] - world[2];
        if depth < self.near || depth > self.far {
            None
        } else {
            Some(depth)
        }
    }

    /// Screen pixels per world unit at the given view depth.
    fn pixels_per_unit(&self, depth: f32, viewport: &ScreenRect) -> f32 {
        let half_height = depth * (self.fov_deg.to_radians() / 2.0).tan();
        viewport.size[1] / (2.0 * half_height)
    }

    /// Project a world position into `viewport`. Returns `None` when the point is clipped.
    pub fn project(&self, world: [f32; 3], viewport: &ScreenRect) -> Option<[f32; 2]> {
        let depth = self.view_depth(world)?;
        let ppu = self.pixels_per_unit(depth, viewport);
        let center = viewport.center();
        Some([
            center[0] + (world[0] - self.position[0]) * ppu,
            center[1] - (world[1] - self.position[1]) * ppu,
        ])
    }

    /// Length in screen pixels of `length` world units at the depth of `world`.
    pub fn project_length(&self, world: [f32; 3], length: f32, viewport: &ScreenRect) -> Option<f32> {
        let depth = self.view_depth(world)?;
        Some(length * self.pixels_per_unit(depth, viewport))
    }
}
