//! CLI command implementations.

pub mod common;
pub mod config;
pub mod devices;
pub mod info;
pub mod play;
pub mod render;
pub mod sounds;
