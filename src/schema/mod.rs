//! Schema module - Render configuration for board animations.

mod config;

pub use config::*;
