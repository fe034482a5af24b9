//! TikZ drawings of geometric graphs.
//!
//! [`GraphPrinter`] draws vertices as filled nodes, edges as straight lines
//! and cones as fans of segments around a center. Every primitive takes a
//! [`StyleOptions`]; [`GraphStyle`] bundles the option sets used for the
//! usual roles (active and inactive edges, highlighted paths, borders).
//!
//! # Example
//!
//! ```
//! use texcanvas::{GraphPrinter, Printer};
//! use texcanvas::geometry::{Edge, Point};
//!
//! let points = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)];
//! let mut graph = GraphPrinter::new("triangle");
//! graph.autoscale(points, 10.0).unwrap();
//!
//! let style = graph.style().clone();
//! graph.draw_edges(&[Edge::new(0, 1), Edge::new(1, 2)], &points, style.active_edge()).unwrap();
//! graph.draw_vertices(&points, style.active_vertex(), style.border());
//!
//! assert!(graph.document().content().contains("\\draw [color=000000"));
//! ```

use std::{f64::consts::PI, path::Path};

use log::trace;

use texcanvas_core::{
    color::HexColor,
    error::GeometryError,
    geometry::{Edge, Point, Vertex},
    number::fixed,
    style::{LineStyle, StyleOptions},
};

use crate::{
    canvas::Canvas,
    config::GraphConfig,
    document::{Document, Printer},
    error::TexError,
};

/// Option sets for the common drawing roles, derived from a [`GraphConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStyle {
    vertex_radius: f64,
    colors: Vec<HexColor>,
    active_edge: StyleOptions,
    inactive_edge: StyleOptions,
    triangulation_edge: StyleOptions,
    cone: StyleOptions,
    highlight_edge: StyleOptions,
    highlight_vertex: StyleOptions,
    active_vertex: StyleOptions,
    border: StyleOptions,
}

impl GraphStyle {
    pub fn from_config(config: &GraphConfig) -> Self {
        let radius = config.vertex_radius();
        let active_width = config.active_edge_width();
        let inactive_width = config.inactive_edge_width();

        Self {
            vertex_radius: radius,
            colors: config.colors().into_iter().cloned().collect(),
            active_edge: StyleOptions::new()
                .with_color(config.active_edge())
                .with_line_width(active_width),
            inactive_edge: StyleOptions::new()
                .with_color(config.inactive_edge())
                .with_line_width(inactive_width),
            triangulation_edge: StyleOptions::new()
                .with_line_style(LineStyle::DenselyDashed)
                .with_color(config.inactive_edge())
                .with_line_width(inactive_width / 2.0),
            cone: StyleOptions::new()
                .with_color(config.active_edge())
                .with_line_width(inactive_width / 3.0)
                .with_line_style(LineStyle::DenselyDotted),
            highlight_edge: StyleOptions::new()
                .with_color(config.highlight())
                .with_line_width(active_width),
            highlight_vertex: StyleOptions::new()
                .with_flag("diamond")
                .with("vertex", fixed(radius * 1.61))
                .with_color(config.highlight())
                .with_fill(config.highlight())
                .with_line_width(0.0),
            active_vertex: StyleOptions::new()
                .with_flag("circle")
                .with("vertex", fixed(radius))
                .with_color(config.background())
                .with_fill(config.active_vertex())
                .with_line_width(0.0),
            border: StyleOptions::new()
                .with("border", fixed(radius))
                .with_color(config.active_edge())
                .with_line_width(inactive_width),
        }
    }

    pub fn vertex_radius(&self) -> f64 {
        self.vertex_radius
    }

    /// Returns the colors the style refers to.
    pub fn colors(&self) -> &[HexColor] {
        &self.colors
    }

    pub fn active_edge(&self) -> &StyleOptions {
        &self.active_edge
    }

    pub fn inactive_edge(&self) -> &StyleOptions {
        &self.inactive_edge
    }

    pub fn triangulation_edge(&self) -> &StyleOptions {
        &self.triangulation_edge
    }

    pub fn cone(&self) -> &StyleOptions {
        &self.cone
    }

    pub fn highlight_edge(&self) -> &StyleOptions {
        &self.highlight_edge
    }

    pub fn highlight_vertex(&self) -> &StyleOptions {
        &self.highlight_vertex
    }

    pub fn active_vertex(&self) -> &StyleOptions {
        &self.active_vertex
    }

    pub fn border(&self) -> &StyleOptions {
        &self.border
    }

    /// Returns the tikzpicture options defining the `vertex` and `border` styles.
    pub fn picture_options(&self) -> String {
        format!(
            "vertex/.style = {{circle,fill, minimum size={radius}cm, inner sep=0pt, outer sep=0pt}}, \
             vertex/.default = 6pt, \
             border/.style = {{circle,draw,fill=none, minimum size=#1cm, inner sep=0pt, outer sep=0pt}}, \
             border/.default = {radius}, font=\\tiny",
            radius = fixed(self.vertex_radius)
        )
    }
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self::from_config(&GraphConfig::default())
    }
}

/// Draws vertices, edges and cones into a tikzpicture.
#[derive(Debug, Clone)]
pub struct GraphPrinter {
    canvas: Canvas,
    style: GraphStyle,
}

impl GraphPrinter {
    /// Creates a graph printer with the default [`GraphStyle`].
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_style(path, GraphStyle::default())
    }

    /// Creates a graph printer and registers every color of `style`.
    pub fn with_style(path: impl AsRef<Path>, style: GraphStyle) -> Self {
        let mut canvas = Canvas::new(path, &style.picture_options());
        let document = canvas.document_mut();
        document.set_content("\n\n".to_string());
        for color in style.colors() {
            document.define(color.clone());
        }
        Self { canvas, style }
    }

    pub fn style(&self) -> &GraphStyle {
        &self.style
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Fits the canvas scale to `points`. See [`Canvas::autoscale`].
    pub fn autoscale<I>(&mut self, points: I, target_size: f64) -> Result<f64, TexError>
    where
        I: IntoIterator<Item = Point>,
    {
        self.canvas.autoscale(points, target_size)
    }

    /// Draws an unlabeled vertex.
    pub fn draw_vertex(&mut self, x: f64, y: f64, options: &StyleOptions) {
        self.draw_vertex_with_label(x, y, "", options, &StyleOptions::new());
    }

    /// Draws a vertex named `vertex<label>` with `label` as its text.
    ///
    /// Non-empty `border_options` add an unfilled outline node at the same
    /// position.
    pub fn draw_vertex_with_label(
        &mut self,
        x: f64,
        y: f64,
        label: &str,
        options: &StyleOptions,
        border_options: &StyleOptions,
    ) {
        let coordinate = self.canvas.coordinate(Point::new(x, y));
        trace!(label, coordinate; "Drawing vertex");

        let mut markup = format!(
            "\\node (vertex{label}) [fill,{}] at {coordinate} {{{label}}};\n",
            options.expand()
        );
        if !border_options.is_empty() {
            markup.push_str(&format!(
                "\\node [{}] at {coordinate} {{}};\n",
                border_options.expand()
            ));
        }
        self.canvas.push(&markup);
    }

    /// Draws one unlabeled vertex per point, followed by a blank line.
    pub fn draw_vertices(
        &mut self,
        points: &[Point],
        options: &StyleOptions,
        border_options: &StyleOptions,
    ) {
        for point in points {
            self.draw_vertex_with_label(point.x(), point.y(), "", options, border_options);
        }
        self.canvas.push("\n");
    }

    /// Draws one vertex per point, labeled with its index.
    pub fn draw_vertices_with_info(
        &mut self,
        points: &[Point],
        options: &StyleOptions,
        border_options: &StyleOptions,
    ) {
        for (index, point) in points.iter().enumerate() {
            self.draw_vertex_with_label(
                point.x(),
                point.y(),
                &index.to_string(),
                options,
                border_options,
            );
        }
        self.canvas.push("\n");
    }

    /// Draws vertices labeled with their own labels.
    pub fn draw_labeled_vertices(
        &mut self,
        vertices: &[Vertex],
        options: &StyleOptions,
        border_options: &StyleOptions,
    ) {
        for vertex in vertices {
            let position = vertex.position();
            self.draw_vertex_with_label(
                position.x(),
                position.y(),
                vertex.label().unwrap_or_default(),
                options,
                border_options,
            );
        }
        self.canvas.push("\n");
    }

    /// Draws both endpoints of a pair.
    pub fn draw_vertex_pair(&mut self, first: Point, second: Point, options: &StyleOptions) {
        self.draw_vertex(first.x(), first.y(), options);
        self.draw_vertex(second.x(), second.y(), options);
    }

    /// Draws every edge between the points it indexes.
    ///
    /// # Errors
    ///
    /// Returns [`TexError::EdgeOutOfRange`] if an edge refers past the end of
    /// `points`. Nothing is drawn in that case.
    pub fn draw_edges(
        &mut self,
        edges: &[Edge],
        points: &[Point],
        options: &StyleOptions,
    ) -> Result<(), TexError> {
        let segments = edges
            .iter()
            .map(|edge| {
                match (points.get(edge.source()), points.get(edge.target())) {
                    (Some(&source), Some(&target)) => Ok((source, target)),
                    _ => Err(TexError::EdgeOutOfRange {
                        source_index: edge.source(),
                        target_index: edge.target(),
                        len: points.len(),
                    }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (source, target) in segments {
            self.draw_edge(source, target, options);
        }
        Ok(())
    }

    pub fn draw_edge(&mut self, source: Point, target: Point, options: &StyleOptions) {
        self.draw_line(source.x(), source.y(), target.x(), target.y(), options);
    }

    /// Draws a straight segment between two points.
    pub fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, options: &StyleOptions) {
        let markup = format!(
            "\\draw [{}] {} -- {};\n",
            options.expand(),
            self.canvas.coordinate(Point::new(x1, y1)),
            self.canvas.coordinate(Point::new(x2, y2))
        );
        self.canvas.push(&markup);
    }

    /// Draws `count` cone boundaries around `center`.
    ///
    /// The first segment starts `length` away from `center` in the direction
    /// of `orientation`; each next one is rotated clockwise by `π / count`.
    ///
    /// # Errors
    ///
    /// Returns a degenerate [`TexError::Geometry`] if `orientation` equals
    /// `center`, or if `center`, `orientation` or `length` is not finite.
    pub fn draw_cones(
        &mut self,
        center: Point,
        orientation: Point,
        count: usize,
        length: f64,
        options: &StyleOptions,
    ) -> Result<(), TexError> {
        for start in cone_starts(center, orientation, count, length)? {
            self.draw_edge(start, center, options);
        }
        Ok(())
    }

    /// Draws a dotted unit grid over `[-5.5, 5.5]²`.
    pub fn draw_grid(&mut self) {
        self.canvas.push(Self::grid());
        self.canvas.push("\n");
    }

    pub fn grid() -> &'static str {
        "\\draw[step=1.0,black,thin,dotted] (-5.5,-5.5) grid (5.5,5.5);"
    }
}

impl Printer for GraphPrinter {
    fn document(&self) -> &Document {
        self.canvas.document()
    }

    fn document_mut(&mut self) -> &mut Document {
        self.canvas.document_mut()
    }
}

/// Returns the outer endpoint of every cone boundary.
fn cone_starts(
    center: Point,
    orientation: Point,
    count: usize,
    length: f64,
) -> Result<Vec<Point>, TexError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if !(center.is_finite() && orientation.is_finite() && length.is_finite()) {
        return Err(GeometryError::NonFiniteCoordinate.into());
    }

    let direction = orientation.sub_point(center);
    let norm = direction.hypot();
    if !norm.is_finite() {
        return Err(GeometryError::NonFiniteCoordinate.into());
    }
    if norm == 0.0 {
        return Err(GeometryError::ZeroLengthDirection.into());
    }

    let first = direction.scale(length / norm);
    let theta = PI / count as f64;
    Ok((0..count)
        .map(|i| first.rotate_clockwise(theta * i as f64).add_point(center))
        .collect())
}
