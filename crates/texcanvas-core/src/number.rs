//! Fixed-point number formatting.
//!
//! Every number that ends up in LaTeX markup goes through [`fixed`], which
//! prints six fractional digits. This keeps the emitted text byte-compatible
//! with documents produced by `printf("%f")`-style tooling.

/// Number of fractional digits used when no explicit precision is requested.
pub const DEFAULT_PRECISION: usize = 6;

/// Formats `value` with [`DEFAULT_PRECISION`] fractional digits.
///
/// # Examples
///
/// ```
/// use texcanvas_core::number::fixed;
///
/// assert_eq!(fixed(0.5), "0.500000");
/// assert_eq!(fixed(-12.0), "-12.000000");
/// ```
pub fn fixed(value: f64) -> String {
    fixed_with(value, DEFAULT_PRECISION)
}

/// Formats `value` with exactly `digits` fractional digits.
pub fn fixed_with(value: f64, digits: usize) -> String {
    format!("{value:.digits$}")
}
