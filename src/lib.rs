//! spacer library
//!
//! Normalizes mixed CJK/Latin text: full-width to half-width mapping,
//! CJK/Latin auto-spacing, and empty-line removal.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod normalize;

pub use config::Config;
pub use normalize::{normalize, TransformOptions};
