pub mod controls;
pub mod status;
pub mod thumbnail;
pub mod viewport;
