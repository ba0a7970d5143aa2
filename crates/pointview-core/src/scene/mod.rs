//! Declarative description of what the viewer draws each frame.
//!
//! A [`Scene`] is rebuilt from the dataset and the current view state on every
//! frame; nothing in it is retained between frames.

mod camera;
mod color;
mod lighting;
mod picking;

pub use camera::{Camera, ScreenRect};
pub use color::Rgb;
pub use lighting::Lighting;
pub use picking::{pick, ProjectedPoint};

use crate::config::{PaletteConfig, ViewerConfig};
use crate::consts::{CIRCLE_RADIUS, CIRCLE_SEGMENTS};
use crate::dataset::{Label, PointDataset};
use crate::view::ViewState;

/// One filled circle in the z = 0 plane.
#[derive(Clone, Debug, PartialEq)]
pub struct PointPrimitive {
    /// Dataset row this primitive was derived from.
    pub index: usize,
    pub position: [f32; 3],
    pub scale: [f32; 3],
    pub radius: f32,
    pub segments: usize,
    pub color: Rgb,
    /// `color` after lighting.
    pub shaded: Rgb,
    pub hovered: bool,
}

impl PointPrimitive {
    /// Radius in world units after scaling.
    pub fn world_radius(&self) -> f32 {
        self.radius * self.scale[0]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub points: Vec<PointPrimitive>,
    pub camera: Camera,
    pub lighting: Lighting,
}

/// Fill color for `label`: primary for label 1, secondary for everything else.
pub fn label_color(label: Label, palette: &PaletteConfig) -> Rgb {
    if label.is_primary() {
        palette.primary
    } else {
        palette.secondary
    }
}

pub fn build_scene(dataset: &PointDataset, state: &ViewState, config: &ViewerConfig) -> Scene {
    let size = state.point_size();
    let points = dataset
        .iter()
        .map(|p| {
            let color = label_color(p.label, &config.palette);
            PointPrimitive {
                index: p.index,
                position: [p.x, p.y, 0.0],
                scale: [size, size, 1.0],
                radius: CIRCLE_RADIUS,
                segments: CIRCLE_SEGMENTS,
                color,
                shaded: config.lighting.shade(color),
                hovered: state.hovered() == Some(p.index),
            }
        })
        .collect();

    Scene {
        points,
        camera: config.camera.clone(),
        lighting: config.lighting.clone(),
    }
}

impl Scene {
    /// Screen positions and radii of every visible point, in draw order.
    pub fn project(&self, viewport: &ScreenRect) -> Vec<ProjectedPoint> {
        self.points
            .iter()
            .filter_map(|p| {
                let center = self.camera.project(p.position, viewport)?;
                let radius = self
                    .camera
                    .project_length(p.position, p.world_radius(), viewport)?;
                Some(ProjectedPoint {
                    index: p.index,
                    center,
                    radius,
                })
            })
            .collect()
    }
}
