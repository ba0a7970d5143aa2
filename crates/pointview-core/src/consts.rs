/// Point size applied to every point before the slider is touched.
pub const DEFAULT_POINT_SIZE: f32 = 1.0;

/// Lower bound of the point size slider.
pub const MIN_POINT_SIZE: f32 = 0.1;

/// Upper bound of the point size slider.
pub const MAX_POINT_SIZE: f32 = 5.0;

/// Slider increment.
pub const POINT_SIZE_STEP: f32 = 0.1;

/// Horizontal offset (screen px) between the pointer and the thumbnail's top-left corner.
pub const THUMBNAIL_OFFSET_X: f32 = 10.0;

/// Vertical offset (screen px). Negative moves the thumbnail up.
pub const THUMBNAIL_OFFSET_Y: f32 = -10.0;

/// Display width of the hover thumbnail; height follows the image aspect ratio.
pub const THUMBNAIL_WIDTH: f32 = 100.0;

/// Largest decoded thumbnail side in pixels. Images that would resize past this are rejected.
pub const MAX_THUMBNAIL_SIDE: u32 = 4096;

/// Fill color for label 1 (`#4caf50`).
pub const PRIMARY_COLOR_HEX: u32 = 0x4caf50;

/// Fill color for every other label (`#f44336`).
pub const SECONDARY_COLOR_HEX: u32 = 0xf44336;

/// The label value drawn with the primary color.
pub const PRIMARY_LABEL: i32 = 1;

/// Radius of the unscaled point circle, in world units.
pub const CIRCLE_RADIUS: f32 = 0.5;

/// Number of segments used to tessellate a point circle.
pub const CIRCLE_SEGMENTS: usize = 32;

/// Camera position in world units. The camera looks down -Z at the origin plane.
pub const CAMERA_POSITION: [f32; 3] = [0.0, 0.0, 200.0];

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEG: f32 = 50.0;

pub const CAMERA_NEAR: f32 = 0.1;

pub const CAMERA_FAR: f32 = 1000.0;

pub const AMBIENT_INTENSITY: f32 = 0.5;

pub const DIRECTIONAL_POSITION: [f32; 3] = [10.0, 10.0, 10.0];

pub const DIRECTIONAL_INTENSITY: f32 = 1.0;

/// Base path the demo dataset derives its per-point thumbnail paths from.
pub const DEMO_IMAGE_BASE: &str = "/images/point_images";

/// Initial window size of the viewer.
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [1280.0, 800.0];
