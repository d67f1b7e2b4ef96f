//! Veusz 3D scene rendering
//!
//! Library half of the `veusz` binary: layered configuration and scene
//! construction helpers on top of the workspace crates.

pub mod app;
pub mod config;
pub mod scene;

pub use veusz_dialogs as dialogs;
pub use veusz_render as render;
pub use veusz_threed as threed;
