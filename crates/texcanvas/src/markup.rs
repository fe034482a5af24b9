//! Small LaTeX markup helpers.

use texcanvas_core::number::fixed_with;

/// Wraps `input` in `\texttt{...}`.
pub fn texttt(input: &str) -> String {
    format!("\\texttt{{{input}}}")
}

/// Wraps `input` in `\subsection{...}`.
pub fn subsection(input: &str) -> String {
    format!("\\subsection{{{input}}}")
}

/// Wraps `input` in `\mathrm{...}`.
pub fn mathrm(input: &str) -> String {
    format!("\\mathrm{{{input}}}")
}

/// Removes every space character, for use in `\label` / `\ref` keys.
pub fn remove_spaces(input: &str) -> String {
    input.chars().filter(|&c| c != ' ').collect()
}

/// Fixed-point formatting with an optional number of fractional digits.
///
/// `Precision(None)` keeps the six-digit default.
///
/// # Examples
///
/// ```
/// use texcanvas::markup::Precision;
///
/// assert_eq!(Precision(Some(2)).format(3.14159), "3.14");
/// assert_eq!(Precision(None).format(3.0), "3.000000");
/// assert_eq!(Precision(Some(1)).format_str("2.26"), "2.3");
/// assert_eq!(Precision(Some(1)).format_str("n/a"), "n/a");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Precision(pub Option<usize>);

impl Precision {
    pub fn format(self, value: f64) -> String {
        fixed_with(
            value,
            self.0.unwrap_or(texcanvas_core::number::DEFAULT_PRECISION),
        )
    }

    /// Formats `text` if it parses as a number, otherwise returns it unchanged.
    pub fn format_str(self, text: &str) -> String {
        match (self.0, text.trim().parse::<f64>()) {
            (Some(_), Ok(value)) => self.format(value),
            _ => text.to_string(),
        }
    }
}
