//! External LaTeX compiler and PDF viewer.
//!
//! Both programs are opaque subprocesses. The compiler is run to completion
//! and its exit status checked; the viewer is spawned and left running.

use std::{
    path::Path,
    process::{Command, Stdio},
};

use log::{debug, error, info};
use serde::Deserialize;

use crate::error::TexError;

/// Names of the programs used to compile and display documents.
///
/// # Examples
///
/// ```
/// use texcanvas::Toolchain;
///
/// let toolchain = Toolchain::default();
/// assert_eq!(toolchain.compiler(), "pdflatex");
/// assert_eq!(toolchain.viewer(), "evince");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Toolchain {
    /// LaTeX compiler, invoked as `<compiler> -output-directory=<dir> <file>.tex`.
    compiler: String,

    /// PDF viewer, invoked as `<viewer> <file>.pdf`.
    viewer: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            compiler: "pdflatex".to_string(),
            viewer: "evince".to_string(),
        }
    }
}

impl Toolchain {
    /// Creates a toolchain from program names or paths.
    pub fn new(compiler: impl Into<String>, viewer: impl Into<String>) -> Self {
        Self {
            compiler: compiler.into(),
            viewer: viewer.into(),
        }
    }

    pub fn compiler(&self) -> &str {
        &self.compiler
    }

    pub fn viewer(&self) -> &str {
        &self.viewer
    }

    /// Compiles `tex_file`, writing the output into `output_directory`.
    ///
    /// Blocks until the compiler exits. Standard output is discarded and
    /// standard input is closed so that a failing run cannot wait for an
    /// interactive answer.
    ///
    /// # Errors
    ///
    /// Returns [`TexError::Spawn`] if the compiler cannot be started and
    /// [`TexError::ExitStatus`] if it exits unsuccessfully.
    pub fn compile(&self, output_directory: &Path, tex_file: &Path) -> Result<(), TexError> {
        info!(
            compiler = self.compiler,
            file = tex_file.display().to_string();
            "Compiling document"
        );

        let status = Command::new(&self.compiler)
            .arg(format!("-output-directory={}", output_directory.display()))
            .arg(tex_file)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status()
            .map_err(|source| {
                error!(compiler = self.compiler, err:err = source; "Failed to start compiler");
                TexError::Spawn {
                    program: self.compiler.clone(),
                    source,
                }
            })?;

        if !status.success() {
            error!(compiler = self.compiler, status:% = status; "Compiler failed");
            return Err(TexError::ExitStatus {
                program: self.compiler.clone(),
                status,
            });
        }

        debug!(file = tex_file.display().to_string(); "Compilation finished");
        Ok(())
    }

    /// Opens `pdf_file` in the viewer without waiting for it to exit.
    ///
    /// # Errors
    ///
    /// Returns [`TexError::Spawn`] if the viewer cannot be started.
    pub fn view(&self, pdf_file: &Path) -> Result<(), TexError> {
        info!(
            viewer = self.viewer,
            file = pdf_file.display().to_string();
            "Opening document for viewing"
        );

        let child = Command::new(&self.viewer)
            .arg(pdf_file)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| TexError::Spawn {
                program: self.viewer.clone(),
                source,
            })?;

        debug!(pid = child.id(); "Viewer started");
        Ok(())
    }
}
