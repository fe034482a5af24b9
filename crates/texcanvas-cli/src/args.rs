//! Command-line argument definitions for the texcanvas CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the scene file, the output path, the
//! configuration file and what to do with the generated document.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the texcanvas scene renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input scene file (TOML)
    #[arg(help = "Path to the input scene file")]
    pub input: String,

    /// Output path without extension; defaults to the input path without `.toml`
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Write only the body (`<output>_body.tex`) for inclusion in another document
    #[arg(long, conflicts_with_all = ["compile", "view"])]
    pub body_only: bool,

    /// Compile the document with the configured LaTeX compiler
    #[arg(long)]
    pub compile: bool,

    /// Compile the document and open it in the configured viewer
    #[arg(long)]
    pub view: bool,
}

impl Args {
    /// Returns the output path, derived from the input when not given.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(output) => PathBuf::from(output),
            None => PathBuf::from(&self.input).with_extension(""),
        }
    }
}
