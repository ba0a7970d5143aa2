use thiserror::Error;

#[derive(Error, Debug)]
pub enum PointViewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset columns differ in length: x={x}, y={y}, label={label}, file_path={file_path}")]
    MismatchedLengths {
        x: usize,
        y: usize,
        label: usize,
        file_path: usize,
    },

    #[error("Point index {index} out of range (total: {total})")]
    IndexOutOfRange { index: usize, total: usize },

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, PointViewError>;
