use serde::{Deserialize, Serialize};

use crate::consts::{AMBIENT_INTENSITY, DIRECTIONAL_INTENSITY, DIRECTIONAL_POSITION};

use super::color::Rgb;

/// Ambient plus one directional light. Points are flat discs facing +Z.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lighting {
    pub ambient_intensity: f32,
    /// Light position; the light shines from here toward the origin.
    pub directional_position: [f32; 3],
    pub directional_intensity: f32,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient_intensity: AMBIENT_INTENSITY,
            directional_position: DIRECTIONAL_POSITION,
            directional_intensity: DIRECTIONAL_INTENSITY,
        }
    }
}

impl Lighting {
    /// Total light received by a surface with normal +Z.
    pub fn irradiance(&self) -> f32 {
        let [x, y, z] = self.directional_position;
        let len = (x * x + y * y + z * z).sqrt();
        let n_dot_l = if len > 0.0 { (z / len).max(0.0) } else { 0.0 };
        self.ambient_intensity + self.directional_intensity * n_dot_l
    }

    /// Lambert-shaded color of a +Z facing surface.
    pub fn shade(&self, base: Rgb) -> Rgb {
        base.scaled(self.irradiance())
    }
}
