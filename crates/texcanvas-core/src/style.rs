//! TikZ style option lists.
//!
//! Every drawing primitive takes a [`StyleOptions`]: an ordered list of
//! `(key, value)` pairs that is expanded verbatim into the primitive's option
//! brackets. The list is plain data. Duplicate keys are kept, and TikZ applies
//! them left to right, so a later `color` overrides an earlier one.
//!
//! # Overview
//!
//! - [`StyleOptions`]: The ordered option list and its expansion
//! - [`LineStyle`]: Named TikZ dash patterns (solid, dashed, dotted, ...)
//!
//! # Expansion
//!
//! | Entry                   | Expands to          |
//! |-------------------------|---------------------|
//! | `("color", "ff0000")`   | `color=ff0000`      |
//! | `("densely dashed", "")`| `densely dashed`    |
//!
//! Entries are joined with `,` and there is no trailing comma.
//!
//! # Quick Start
//!
//! ```
//! use texcanvas_core::color::HexColor;
//! use texcanvas_core::style::{LineStyle, StyleOptions};
//!
//! let options = StyleOptions::new()
//!     .with_line_style(LineStyle::DenselyDashed)
//!     .with_color(&HexColor::new("bbbbbb").unwrap())
//!     .with_line_width(0.2);
//!
//! assert_eq!(options.expand(), "densely dashed,color=bbbbbb,line width=0.200000");
//! ```

use std::{fmt, str::FromStr};

use crate::{color::HexColor, number::fixed};

/// Defines the dash pattern of a line, using TikZ's predefined pattern names.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    Dashed,
    DenselyDashed,
    LooselyDashed,
    Dotted,
    DenselyDotted,
    LooselyDotted,
    DashDotted,
}

impl LineStyle {
    /// Returns the TikZ option key for this pattern.
    pub fn to_tikz_key(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::DenselyDashed => "densely dashed",
            Self::LooselyDashed => "loosely dashed",
            Self::Dotted => "dotted",
            Self::DenselyDotted => "densely dotted",
            Self::LooselyDotted => "loosely dotted",
            Self::DashDotted => "dash dot",
        }
    }
}

impl FromStr for LineStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "densely dashed" | "densely-dashed" => Ok(Self::DenselyDashed),
            "loosely dashed" | "loosely-dashed" => Ok(Self::LooselyDashed),
            "dotted" => Ok(Self::Dotted),
            "densely dotted" | "densely-dotted" => Ok(Self::DenselyDotted),
            "loosely dotted" | "loosely-dotted" => Ok(Self::LooselyDotted),
            "dash dot" | "dash-dot" | "dashdot" => Ok(Self::DashDotted),
            _ => Err(format!(
                "invalid line style `{s}`, valid values: solid, dashed, densely dashed, \
                 loosely dashed, dotted, densely dotted, loosely dotted, dash dot"
            )),
        }
    }
}

/// An ordered list of TikZ options.
///
/// Provides both mutable (`push`, `push_flag`) and builder (`with_*`) APIs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleOptions {
    options: Vec<(String, String)>,
}

impl StyleOptions {
    /// Creates an empty option list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a `key=value` option.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.options.push((key.into(), value.into()));
    }

    /// Appends an option without a value, such as `circle` or `densely dashed`.
    pub fn push_flag(&mut self, key: impl Into<String>) {
        self.push(key, String::new());
    }

    /// Appends a `key=value` option (builder style).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    /// Appends a value-less option (builder style).
    pub fn with_flag(mut self, key: impl Into<String>) -> Self {
        self.push_flag(key);
        self
    }

    /// Appends `color=<hex>`.
    pub fn with_color(self, color: &HexColor) -> Self {
        self.with("color", color.as_str())
    }

    /// Appends `fill=<hex>`.
    pub fn with_fill(self, color: &HexColor) -> Self {
        self.with("fill", color.as_str())
    }

    /// Appends `line width=<width>` with six fractional digits.
    pub fn with_line_width(self, width: f64) -> Self {
        self.with("line width", fixed(width))
    }

    /// Appends the dash pattern key of `style`.
    pub fn with_line_style(self, style: LineStyle) -> Self {
        self.with_flag(style.to_tikz_key())
    }

    /// Appends every option of `other`, preserving order.
    pub fn extend(&mut self, other: &StyleOptions) {
        self.options.extend(other.options.iter().cloned());
    }

    /// Returns the value of the last option named `key`, if any.
    ///
    /// The last one wins because TikZ applies options left to right.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.options
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Expands the list into the text placed between a primitive's brackets.
    pub fn expand(&self) -> String {
        self.options
            .iter()
            .map(|(key, value)| {
                if value.is_empty() {
                    key.clone()
                } else {
                    format!("{key}={value}")
                }
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for StyleOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expand())
    }
}

impl<K, V> FromIterator<(K, V)> for StyleOptions
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            options: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
