pub mod config;
pub mod consts;
pub mod dataset;
pub mod demo;
pub mod error;
pub mod scene;
pub mod thumbnail;
pub mod view;
