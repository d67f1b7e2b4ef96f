//! Veusz 3D scene renderer
//!
//! Renders a RON scene file into a RON display list.
//!
//! Usage: `veusz [SCENE.ron] [OUTPUT.ron]`
//!
//! Arguments override `scene.path` and `scene.output` from the configuration.
//! Without a scene the built-in demo scene is rendered.

use std::path::PathBuf;
use std::process::ExitCode;

use veusz::app::{self, AppError};
use veusz::config::AppConfig;

fn main() -> ExitCode {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // RUST_LOG wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let scene_path = args.next().or_else(|| config.scene.path.clone());
    let output = args.next().unwrap_or_else(|| config.scene.output.clone());

    match run(&config, scene_path, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig, scene_path: Option<PathBuf>, output: PathBuf) -> Result<(), AppError> {
    let file = app::load_scene(scene_path.as_deref())?;
    let (list, stats) = app::render_scene(&file, config)?;

    list.save(&output)?;
    log::info!(
        "Wrote {} triangles and {} polylines to {}",
        stats.triangles,
        stats.polylines,
        output.display()
    );
    Ok(())
}
