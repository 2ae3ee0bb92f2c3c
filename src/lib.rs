//! Library exports for the magicanvas drawing engine.
//!
//! Exposes the stroke renderer and brush state alongside the configuration,
//! export and commentary subsystems so hosts other than the bundled CLI (a
//! windowed frontend, a web shell) can drive the same canvas.

pub mod commentary;
pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod replay;

pub use config::Config;
