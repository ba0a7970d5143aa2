use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_POINT_SIZE, DEFAULT_WINDOW_SIZE, DEMO_IMAGE_BASE, MAX_POINT_SIZE, MIN_POINT_SIZE,
    POINT_SIZE_STEP, PRIMARY_COLOR_HEX, SECONDARY_COLOR_HEX, THUMBNAIL_OFFSET_X,
    THUMBNAIL_OFFSET_Y, THUMBNAIL_WIDTH,
};
use crate::error::{PointViewError, Result};
use crate::scene::{Camera, Lighting, Rgb};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Directory thumbnail sources are resolved against.
    #[serde(default = "default_image_root")]
    pub image_root: PathBuf,
    /// Base path the demo dataset builds its per-point thumbnail paths from.
    #[serde(default = "default_image_base")]
    pub image_base: String,
    #[serde(default)]
    pub point_size: PointSizeConfig,
    #[serde(default)]
    pub thumbnail: ThumbnailConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
    #[serde(default)]
    pub camera: Camera,
    #[serde(default)]
    pub lighting: Lighting,
    #[serde(default)]
    pub window: WindowConfig,
}

fn default_image_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_image_base() -> String {
    DEMO_IMAGE_BASE.to_string()
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            image_root: default_image_root(),
            image_base: default_image_base(),
            point_size: PointSizeConfig::default(),
            thumbnail: ThumbnailConfig::default(),
            palette: PaletteConfig::default(),
            camera: Camera::default(),
            lighting: Lighting::default(),
            window: WindowConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Read a TOML config file and validate it.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.point_size.validate()?;
        self.thumbnail.validate()?;
        if !(self.camera.near > 0.0 && self.camera.near < self.camera.far) {
            return Err(PointViewError::InvalidConfig(format!(
                "camera clip range {}..{} is empty",
                self.camera.near, self.camera.far
            )));
        }
        if !(self.camera.fov_deg > 0.0 && self.camera.fov_deg < 180.0) {
            return Err(PointViewError::InvalidConfig(format!(
                "camera fov {} must be in (0, 180)",
                self.camera.fov_deg
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointSizeConfig {
    pub default: f32,
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl Default for PointSizeConfig {
    fn default() -> Self {
        Self {
            default: DEFAULT_POINT_SIZE,
            min: MIN_POINT_SIZE,
            max: MAX_POINT_SIZE,
            step: POINT_SIZE_STEP,
        }
    }
}

impl PointSizeConfig {
    /// Clamp `value` into `[min, max]`. Non-finite input yields `None`.
    pub fn clamp(&self, value: f32) -> Option<f32> {
        value.is_finite().then(|| value.clamp(self.min, self.max))
    }

    fn validate(&self) -> Result<()> {
        if !(self.min > 0.0 && self.min <= self.max) {
            return Err(PointViewError::InvalidConfig(format!(
                "point size range {}..{} is invalid",
                self.min, self.max
            )));
        }
        if !(self.min..=self.max).contains(&self.default) {
            return Err(PointViewError::InvalidConfig(format!(
                "default point size {} outside {}..{}",
                self.default, self.min, self.max
            )));
        }
        if !(self.step > 0.0) {
            return Err(PointViewError::InvalidConfig(format!(
                "point size step {} must be positive",
                self.step
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThumbnailConfig {
    /// Display width; height keeps the image aspect ratio.
    pub width: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            width: THUMBNAIL_WIDTH,
            offset_x: THUMBNAIL_OFFSET_X,
            offset_y: THUMBNAIL_OFFSET_Y,
        }
    }
}

impl ThumbnailConfig {
    fn validate(&self) -> Result<()> {
        if !(self.width > 0.0) {
            return Err(PointViewError::InvalidConfig(format!(
                "thumbnail width {} must be positive",
                self.width
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    pub primary: Rgb,
    pub secondary: Rgb,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            primary: Rgb::from_hex(PRIMARY_COLOR_HEX),
            secondary: Rgb::from_hex(SECONDARY_COLOR_HEX),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_SIZE[0],
            height: DEFAULT_WINDOW_SIZE[1],
        }
    }
}
