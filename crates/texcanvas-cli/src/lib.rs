//! CLI logic for the texcanvas scene renderer.
//!
//! A scene file describes one graph drawing or one plot. The CLI renders it
//! into a LaTeX document and optionally compiles and displays it.

pub mod error_adapter;

mod args;
mod config;
mod scene;

pub use args::Args;
pub use scene::{Scene, SceneError};

use std::{fs, path::PathBuf};

use log::{debug, info};

use texcanvas::TexError;

/// Run the texcanvas CLI application
///
/// Reads the scene file, renders it with the loaded configuration and writes
/// the document. Returns the path of the last file produced: the `.tex`
/// file, the `_body.tex` file with `--body-only`, or the PDF when compiling.
///
/// # Errors
///
/// Returns `TexError` for:
/// - Configuration loading errors
/// - Scene file read and parse errors
/// - Invalid scene geometry
/// - Output write errors
/// - Compiler and viewer failures
pub fn run(args: &Args) -> Result<PathBuf, TexError> {
    let output = args.output_path();
    info!(
        input_path = args.input,
        output_path = output.display().to_string();
        "Processing scene"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input).map_err(|err| TexError::read(&args.input, err))?;
    let scene = Scene::from_toml(&source)?;
    debug!(scene:?; "Parsed scene");

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| TexError::Write {
            path: parent.to_path_buf(),
            source: err,
        })?;
    }

    let printer = scene.render(&output, &app_config)?;

    let written = if args.body_only {
        printer.save_body()?
    } else if args.view {
        printer.display()?
    } else if args.compile {
        printer.compile()?
    } else {
        printer.save()?
    };

    info!(output_file = written.display().to_string(); "Scene rendered successfully");
    Ok(written)
}
