//! Scene-to-display-list pipeline used by the binary
//!
//! Load (or build) a scene file, validate it, instantiate it and render it
//! through a [`RecordingPainter`] sized from the configuration.

use std::path::Path;

use veusz_render::{DisplayList, DisplayListError, RecordingPainter, RenderStats, SceneRenderer};
use veusz_threed::{GeometryError, SceneError, SceneFile, SceneValidator, ValidationError};

use crate::config::AppConfig;
use crate::scene::demo_scene;

/// Load the scene at `path`, or the demo scene when there is none
pub fn load_scene(path: Option<&Path>) -> Result<SceneFile, AppError> {
    match path {
        Some(path) => {
            let file = SceneFile::load(path)?;
            log::info!("Loaded scene '{}' from {}", file.name, path.display());
            Ok(file)
        }
        None => {
            log::info!("No scene configured, using the demo scene");
            Ok(demo_scene())
        }
    }
}

/// Validate, instantiate and render a scene file
///
/// Validation problems are logged as warnings, or returned as an error when
/// `debug.strict_validation` is set.
pub fn render_scene(file: &SceneFile, config: &AppConfig) -> Result<(DisplayList, RenderStats), AppError> {
    let problems = SceneValidator::validate(file);
    if !problems.is_empty() {
        if config.debug.strict_validation {
            return Err(AppError::Validation(problems));
        }
        for problem in &problems {
            log::warn!("Scene '{}': {}", file.name, problem);
        }
    }

    let scene = file.instantiate()?;
    let renderer = SceneRenderer::new(config.render.camera(), config.render.viewport());
    let mut painter = RecordingPainter::new(config.render.dpi).with_scaling(config.render.scaling);
    let stats = renderer.render(&scene, &mut painter)?;

    let viewport = renderer.viewport;
    Ok((painter.into_display_list(viewport.width, viewport.height), stats))
}

/// Error from the scene pipeline
#[derive(Debug)]
pub enum AppError {
    Scene(SceneError),
    Validation(Vec<ValidationError>),
    Geometry(GeometryError),
    Output(DisplayListError),
}

impl From<SceneError> for AppError {
    fn from(e: SceneError) -> Self {
        AppError::Scene(e)
    }
}

impl From<GeometryError> for AppError {
    fn from(e: GeometryError) -> Self {
        AppError::Geometry(e)
    }
}

impl From<DisplayListError> for AppError {
    fn from(e: DisplayListError) -> Self {
        AppError::Output(e)
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Scene(e) => write!(f, "Scene error: {}", e),
            AppError::Validation(errors) => {
                write!(f, "Scene failed validation:")?;
                for e in errors {
                    write!(f, "\n  - {}", e)?;
                }
                Ok(())
            }
            AppError::Geometry(e) => write!(f, "Render error: {}", e),
            AppError::Output(e) => write!(f, "Output error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}
