//! The tikzpicture layer shared by graph and plot printers.

use log::debug;

use texcanvas_core::{
    geometry::{Bounds, Point},
    number::fixed,
    scale::ScaleTransform,
};

use crate::{
    document::{Document, DocumentClass, Printer},
    error::TexError,
};

/// A standalone document whose body is a single `tikzpicture`.
///
/// Coordinates given to drawing methods are multiplied by the canvas scale
/// factor, which is the identity until [`Canvas::autoscale`] is called.
#[derive(Debug, Clone)]
pub struct Canvas {
    document: Document,
    scale: ScaleTransform,
}

impl Canvas {
    /// Creates a canvas whose tikzpicture carries `picture_options`.
    pub fn new(path: impl AsRef<std::path::Path>, picture_options: &str) -> Self {
        let mut document = Document::new(path, DocumentClass::Standalone);
        document.set_body_frame(
            Self::tikz_header(picture_options),
            Self::tikz_footer().to_string(),
        );
        Self {
            document,
            scale: ScaleTransform::identity(),
        }
    }

    /// Returns `\begin{tikzpicture}[options]`, without brackets when `options` is empty.
    pub fn tikz_header(options: &str) -> String {
        if options.is_empty() {
            "\\begin{tikzpicture}\n\n".to_string()
        } else {
            format!("\\begin{{tikzpicture}}[{options}]\n\n")
        }
    }

    pub fn tikz_footer() -> &'static str {
        "\\end{tikzpicture}\n\n"
    }

    /// Fits the scale so the larger side of the points' bounding box spans `target_size`.
    ///
    /// Returns the new scale factor.
    ///
    /// # Errors
    ///
    /// Returns [`TexError::Geometry`] for an empty point set, coincident
    /// points or an invalid target size. The previous scale is kept.
    pub fn autoscale<I>(&mut self, points: I, target_size: f64) -> Result<f64, TexError>
    where
        I: IntoIterator<Item = Point>,
    {
        self.scale = ScaleTransform::fit_points(points, target_size)?;
        debug!(factor = self.scale.factor(); "Canvas autoscaled");
        Ok(self.scale.factor())
    }

    /// Same as [`Self::autoscale`] for an explicit bounding box.
    pub fn autoscale_bounds(&mut self, bounds: Bounds, target_size: f64) -> Result<f64, TexError> {
        self.scale = ScaleTransform::fit_bounds(bounds, target_size)?;
        debug!(factor = self.scale.factor(); "Canvas autoscaled");
        Ok(self.scale.factor())
    }

    pub fn set_scale(&mut self, scale: ScaleTransform) {
        self.scale = scale;
    }

    pub fn scale(&self) -> ScaleTransform {
        self.scale
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale.factor()
    }

    /// Returns `(x,y)` for `point` after scaling.
    pub fn coordinate(&self, point: Point) -> String {
        let scaled = self.scale.apply(point);
        format!("({},{})", fixed(scaled.x()), fixed(scaled.y()))
    }

    pub(crate) fn push(&mut self, markup: &str) {
        self.document.add_raw_text(markup);
    }
}

impl Printer for Canvas {
    fn document(&self) -> &Document {
        &self.document
    }

    fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }
}
