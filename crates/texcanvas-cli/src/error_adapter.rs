//! Error adapter for converting TexError to miette diagnostics.
//!
//! This module provides the bridge between the library's error type and
//! miette's report formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use texcanvas::{ErrorKind, TexError};

/// Adapter giving a [`TexError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a TexError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0.kind() {
            ErrorKind::Configuration => "texcanvas::configuration",
            ErrorKind::Resource => "texcanvas::resource",
            ErrorKind::Geometry => "texcanvas::geometry",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            TexError::Color(_) => "colors are six hex digits such as `ff0000`, or CSS color names",
            TexError::Geometry(_) => "autoscaling and cones need at least two distinct points",
            TexError::EdgeOutOfRange { .. } => {
                "edge endpoints are zero-based indices into `points`"
            }
            TexError::Spawn { .. } => {
                "check that the program is installed, or set `[toolchain]` in the configuration"
            }
            TexError::ExitStatus { .. } => "see the compiler's `.log` file next to the output",
            TexError::Read { .. } => "check the scene file path",
            TexError::Write { .. } => "check that the output directory exists and is writable",
            TexError::UnknownSeries(_) | TexError::InvalidArgument(_) | TexError::Io(_) => {
                return None;
            }
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use texcanvas::{color::HexColor, geometry::Point, scale::ScaleTransform};

    use super::*;

    fn code_of(err: &TexError) -> String {
        ErrorAdapter(err)
            .code()
            .map(|code| code.to_string())
            .unwrap_or_default()
    }

    #[test]
    fn test_codes_follow_error_kind() {
        let color = TexError::from(HexColor::new("ff").unwrap_err());
        assert_eq!(code_of(&color), "texcanvas::configuration");

        let coincident = ScaleTransform::fit_points([Point::new(1.0, 1.0)], 10.0).unwrap_err();
        assert_eq!(code_of(&TexError::from(coincident)), "texcanvas::geometry");

        let write = TexError::Write {
            path: "out.tex".into(),
            source: io::Error::other("denied"),
        };
        assert_eq!(code_of(&write), "texcanvas::resource");
    }

    #[test]
    fn test_help_and_display() {
        let err = TexError::Spawn {
            program: "pdflatex".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let adapter = ErrorAdapter(&err);
        assert_eq!(adapter.to_string(), err.to_string());
        assert!(adapter.help().unwrap().to_string().contains("[toolchain]"));

        let missing = TexError::read("scene.toml", io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(ErrorAdapter(&missing).help().is_some());
        assert_eq!(code_of(&missing), "texcanvas::resource");

        let plain = TexError::InvalidArgument("bad".to_string());
        assert!(ErrorAdapter(&plain).help().is_none());
    }
}
