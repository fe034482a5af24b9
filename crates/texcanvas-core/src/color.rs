//! Color handling for texcanvas documents
//!
//! LaTeX refers to colors by name. texcanvas uses the six hex digits of a color
//! as its name, so a document that defines
//!
//! ```text
//! \definecolor{ff0000}{RGB}{ 255, 0, 0 }
//! ```
//!
//! can draw with `color=ff0000`. This module provides [`HexColor`], which
//! validates and parses such names, and [`ColorRegistry`], the deduplicated set
//! of colors a document has to define in its preamble.
//!
//! CSS color strings ("red", "#2288dd", "rgb(10, 20, 30)") are converted to hex
//! through the `DynamicColor` type from the color crate, which is how
//! configuration files may name colors.

use std::{fmt, str::FromStr};

use color::{DynamicColor, Srgb};
use indexmap::IndexSet;
use serde::Deserialize;

use crate::error::ColorError;

/// Parses a six-digit hex string into its red, green and blue components.
///
/// The digits may be upper or lower case. There is no leading `#`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidLength`] unless the string has exactly six
/// characters and [`ColorError::InvalidDigit`] if any of them is not a hex
/// digit.
///
/// # Examples
///
/// ```
/// use texcanvas_core::color::parse_hex_rgb;
///
/// assert_eq!(parse_hex_rgb("2288DD").unwrap(), [0x22, 0x88, 0xdd]);
/// assert!(parse_hex_rgb("22 8DD").is_err());
/// ```
pub fn parse_hex_rgb(hex: &str) -> Result<[u8; 3], ColorError> {
    if hex.len() != 6 {
        return Err(ColorError::InvalidLength(hex.to_string()));
    }
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigit(hex.to_string()));
    }

    let mut rgb = [0u8; 3];
    for (i, component) in rgb.iter_mut().enumerate() {
        // All six bytes are ASCII hex digits, so every slice is a valid pair.
        *component = u8::from_str_radix(&hex[2 * i..2 * i + 2], 16)
            .map_err(|_| ColorError::InvalidDigit(hex.to_string()))?;
    }
    Ok(rgb)
}

/// A validated six-digit hex RGB color, used verbatim as a LaTeX color name.
///
/// Equality and hashing use the text as written, because LaTeX color names
/// are case sensitive: `FEFEF6` and `fefef6` are two different definitions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct HexColor {
    hex: String,
    rgb: [u8; 3],
}

impl HexColor {
    /// Create a new `HexColor` from six hex digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use texcanvas_core::color::HexColor;
    ///
    /// let red = HexColor::new("ff0000").unwrap();
    /// assert_eq!(red.rgb(), [255, 0, 0]);
    /// assert!(HexColor::new("#ff0000").is_err());
    /// ```
    pub fn new(hex: &str) -> Result<Self, ColorError> {
        let rgb = parse_hex_rgb(hex)?;
        Ok(Self {
            hex: hex.to_string(),
            rgb,
        })
    }

    /// Create a `HexColor` from any CSS color string.
    ///
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)",
    /// "red", etc. The result is always written in lower case hex. Alpha is
    /// dropped, LaTeX `RGB` definitions have no transparency.
    ///
    /// # Examples
    ///
    /// ```
    /// use texcanvas_core::color::HexColor;
    ///
    /// let blue = HexColor::from_css("blue").unwrap();
    /// assert_eq!(blue.as_str(), "0000ff");
    /// ```
    pub fn from_css(color_str: &str) -> Result<Self, ColorError> {
        let color = DynamicColor::from_str(color_str).map_err(|err| ColorError::Unrecognized {
            input: color_str.to_string(),
            reason: err.to_string(),
        })?;
        let rgba = color.to_alpha_color::<Srgb>().to_rgba8();
        Self::new(&format!("{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b))
    }

    /// Resolve a color written either as six hex digits or as a CSS color.
    ///
    /// Six hex digits are kept exactly as written so that existing documents
    /// keep their color names; anything else goes through [`Self::from_css`].
    pub fn resolve(color_str: &str) -> Result<Self, ColorError> {
        match Self::new(color_str) {
            Ok(color) => Ok(color),
            Err(_) => Self::from_css(color_str),
        }
    }

    /// Returns the color name as written.
    pub fn as_str(&self) -> &str {
        &self.hex
    }

    /// Returns the red, green and blue components.
    pub fn rgb(&self) -> [u8; 3] {
        self.rgb
    }

    /// Returns the `\definecolor` directive declaring this color.
    ///
    /// # Examples
    ///
    /// ```
    /// use texcanvas_core::color::HexColor;
    ///
    /// let color = HexColor::new("2288DD").unwrap();
    /// assert_eq!(color.definition(), "\\definecolor{2288DD}{RGB}{ 34, 136, 221 }\n");
    /// ```
    pub fn definition(&self) -> String {
        let [r, g, b] = self.rgb;
        format!("\\definecolor{{{}}}{{RGB}}{{ {r}, {g}, {b} }}\n", self.hex)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::resolve(&value)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

/// The set of colors a document must define, deduplicated by name.
///
/// Iteration follows first registration, which keeps generated preambles
/// stable from one run to the next.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorRegistry {
    colors: IndexSet<HexColor>,
}

impl ColorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a color. Returns `false` if it was already present.
    pub fn define(&mut self, color: HexColor) -> bool {
        self.colors.insert(color)
    }

    /// Adds every color of `other` to this registry.
    pub fn merge(&mut self, other: &ColorRegistry) {
        for color in &other.colors {
            if !self.colors.contains(color) {
                self.colors.insert(color.clone());
            }
        }
    }

    /// Returns `true` if a color with this exact name is registered.
    pub fn contains(&self, hex: &str) -> bool {
        self.colors.iter().any(|color| color.as_str() == hex)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HexColor> {
        self.colors.iter()
    }

    /// Returns one `\definecolor` line per color followed by a blank line.
    pub fn definitions(&self) -> String {
        let mut definitions: String = self.colors.iter().map(HexColor::definition).collect();
        definitions.push('\n');
        definitions
    }
}

impl<'a> IntoIterator for &'a ColorRegistry {
    type Item = &'a HexColor;
    type IntoIter = indexmap::set::Iter<'a, HexColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_new() {
        let red = HexColor::new("ff0000");
        assert!(red.is_ok());
        assert_eq!(red.unwrap().rgb(), [255, 0, 0]);

        assert!(matches!(
            HexColor::new("fff"),
            Err(ColorError::InvalidLength(_))
        ));
        assert!(matches!(
            HexColor::new("gg0000"),
            Err(ColorError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_hex_color_keeps_case() {
        let color = HexColor::new("FEFEF6").unwrap();
        assert_eq!(color.as_str(), "FEFEF6");
        assert_eq!(color.rgb(), [0xfe, 0xfe, 0xf6]);
        assert_ne!(color, HexColor::new("fefef6").unwrap());
    }

    #[test]
    fn test_hex_color_rejects_multibyte_input() {
        // six bytes, but not six hex digits
        assert!(HexColor::new("ééé").is_err());
    }

    #[test]
    fn test_from_css_named_and_functional() {
        assert_eq!(HexColor::from_css("red").unwrap().as_str(), "ff0000");
        assert_eq!(
            HexColor::from_css("rgb(34, 136, 221)").unwrap().as_str(),
            "2288dd"
        );
        assert!(HexColor::from_css("not-a-color").is_err());
    }

    #[test]
    fn test_resolve_prefers_hex_digits() {
        assert_eq!(HexColor::resolve("BBBBBB").unwrap().as_str(), "BBBBBB");
        assert_eq!(HexColor::resolve("black").unwrap().as_str(), "000000");
    }

    #[test]
    fn test_definition_format() {
        let color = HexColor::new("f7b267").unwrap();
        assert_eq!(
            color.definition(),
            "\\definecolor{f7b267}{RGB}{ 247, 178, 103 }\n"
        );
    }

    #[test]
    fn test_registry_deduplicates_by_value() {
        let mut registry = ColorRegistry::new();
        assert!(registry.define(HexColor::new("000000").unwrap()));
        assert!(!registry.define(HexColor::new("000000").unwrap()));
        assert!(registry.define(HexColor::new("2288DD").unwrap()));

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("2288DD"));
        assert!(!registry.contains("2288dd"));
    }

    #[test]
    fn test_registry_merge_is_union() {
        let mut a = ColorRegistry::new();
        a.define(HexColor::new("000000").unwrap());
        a.define(HexColor::new("111111").unwrap());

        let mut b = ColorRegistry::new();
        b.define(HexColor::new("111111").unwrap());
        b.define(HexColor::new("222222").unwrap());

        a.merge(&b);
        let names: Vec<&str> = a.iter().map(HexColor::as_str).collect();
        assert_eq!(names, ["000000", "111111", "222222"]);
    }

    #[test]
    fn test_registry_definitions_end_with_blank_line() {
        let mut registry = ColorRegistry::new();
        assert_eq!(registry.definitions(), "\n");

        registry.define(HexColor::new("000000").unwrap());
        assert_eq!(
            registry.definitions(),
            "\\definecolor{000000}{RGB}{ 0, 0, 0 }\n\n"
        );
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    /// Formatting the parsed components back to hex reproduces the input.
    fn check_hex_roundtrip(hex: &str) -> Result<(), TestCaseError> {
        let [r, g, b] = parse_hex_rgb(hex).map_err(|err| TestCaseError::fail(err.to_string()))?;
        let formatted = format!("{r:02x}{g:02x}{b:02x}");

        prop_assert_eq!(formatted, hex.to_ascii_lowercase());
        Ok(())
    }

    /// Strings that are not six hex digits never parse.
    fn check_wrong_length_rejected(hex: &str) -> Result<(), TestCaseError> {
        prop_assert!(parse_hex_rgb(hex).is_err());
        Ok(())
    }

    proptest! {
        #[test]
        fn hex_roundtrip(hex in "[0-9a-fA-F]{6}") {
            check_hex_roundtrip(&hex)?;
        }

        #[test]
        fn wrong_length_rejected(hex in "[0-9a-fA-F]{0,5}|[0-9a-fA-F]{7,10}") {
            check_wrong_length_rejected(&hex)?;
        }
    }
}
