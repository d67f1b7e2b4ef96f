//! Scene construction utilities
//!
//! This module provides a declarative API for building scene files.

mod scene_builder;

pub use scene_builder::{demo_scene, SceneBuilder};
