//! PGFPlots charts.
//!
//! A [`PlotPrinter`] renders a set of [`Series`] into a single `axis`
//! environment. Each series gets a marker style from the printer's
//! [`PaletteAllocator`], keyed by the series label, so the same label keeps
//! the same marker across calls.
//!
//! # Example
//!
//! ```
//! use texcanvas::{AxisLabels, PlotPrinter, Printer, Series};
//!
//! let mut plot = PlotPrinter::new("runtime");
//! let series = [
//!     Series::from(vec![(0.0, 1.0), (100.0, 3.0)]),
//!     Series::from(vec![(0.0, 2.0), (100.0, 2.5)]),
//! ];
//! plot.plot_axis(&series, &["greedy", "theta"], &AxisLabels::new().with_x_label("$n$"));
//!
//! let content = plot.document().content();
//! assert!(content.starts_with("\\begin{axis}["));
//! assert_eq!(content.matches("\\addplot").count(), 2);
//! assert!(content.ends_with("\\label{plots:runtime}"));
//! ```

use std::path::Path;

use log::debug;
use serde::Deserialize;

use texcanvas_core::{color::HexColor, geometry::Point};

use crate::{
    canvas::Canvas,
    config::PlotConfig,
    document::{Document, Printer},
    error::TexError,
    markup::{remove_spaces, texttt},
    palette::{PLOT_COLORS, PaletteAllocator},
};

/// One data series of a plot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    points: Vec<Point>,
}

impl Series {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<(f64, f64)>> for Series {
    fn from(points: Vec<(f64, f64)>) -> Self {
        points.into_iter().collect()
    }
}

impl FromIterator<(f64, f64)> for Series {
    fn from_iter<T: IntoIterator<Item = (f64, f64)>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(Point::from).collect())
    }
}

/// Axis title and labels. Unset or empty values are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AxisLabels {
    x_label: Option<String>,
    y_label: Option<String>,
    title: Option<String>,
}

impl AxisLabels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn x_label(&self) -> Option<&str> {
        non_empty(&self.x_label)
    }

    pub fn y_label(&self) -> Option<&str> {
        non_empty(&self.y_label)
    }

    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

/// Returns `count` evenly spaced x positions spanning every point of `series`.
///
/// Returns no ticks when `count` is zero or there are no points, and only the
/// minimum when `count` is one. With `truncate`, positions are truncated
/// toward zero.
///
/// # Examples
///
/// ```
/// use texcanvas::Series;
/// use texcanvas::plot::x_ticks;
///
/// let series = [Series::from(vec![(0.0, 1.0), (100.0, 2.0)])];
/// assert_eq!(x_ticks(&series, 5, true), [0.0, 25.0, 50.0, 75.0, 100.0]);
/// assert_eq!(x_ticks(&series, 3, false), [0.0, 50.0, 100.0]);
/// ```
pub fn x_ticks(series: &[Series], count: usize, truncate: bool) -> Vec<f64> {
    let mut xs = series.iter().flat_map(|s| s.points()).map(|p| p.x());
    let Some(first) = xs.next() else {
        return Vec::new();
    };
    if count == 0 {
        return Vec::new();
    }

    let (min, max) = xs.fold((first, first), |(min, max), x| (min.min(x), max.max(x)));
    let step = if count > 1 {
        (max - min) / (count - 1) as f64
    } else {
        0.0
    };

    (0..count)
        .map(|i| {
            let tick = min + step * i as f64;
            if truncate { tick.trunc() } else { tick }
        })
        .collect()
}

/// Renders series into a PGFPlots axis.
#[derive(Debug, Clone)]
pub struct PlotPrinter {
    canvas: Canvas,
    palette: PaletteAllocator,
    config: PlotConfig,
}

impl PlotPrinter {
    /// Creates a plot printer with the default [`PlotConfig`] and marker palette.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_config(path, PlotConfig::default())
    }

    pub fn with_config(path: impl AsRef<Path>, config: PlotConfig) -> Self {
        let mut canvas = Canvas::new(path, &format!("scale={}", config.scale()));
        for hex in PLOT_COLORS {
            if let Ok(color) = HexColor::new(hex) {
                canvas.document_mut().define(color);
            }
        }
        Self {
            canvas,
            palette: PaletteAllocator::markers(),
            config,
        }
    }

    /// Replaces the marker allocator (builder style).
    pub fn with_palette(mut self, palette: PaletteAllocator) -> Self {
        self.palette = palette;
        self
    }

    pub fn palette(&self) -> &PaletteAllocator {
        &self.palette
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Replaces the body content with one axis holding every series.
    ///
    /// Series `i` is labeled `labels[i]`, or unlabeled when there are fewer
    /// labels than series. Labels are given markers in order before any
    /// series is drawn.
    ///
    /// The axis title is `axis.title()`, not the document caption. No
    /// `title=` key is emitted when it is empty.
    pub fn plot_axis(&mut self, series: &[Series], labels: &[&str], axis: &AxisLabels) {
        self.palette.preassign(labels.iter().copied());

        let mut markup = self.axis_header(series, axis);
        for (index, points) in series.iter().enumerate() {
            let label = labels.get(index).copied().unwrap_or_default();
            markup.push_str(&self.plot_header(label));
            for point in points.points() {
                markup.push_str(&self.coordinate(*point));
            }
            markup.push_str(Self::plot_footer());
            if self.config.legend() && !label.is_empty() {
                markup.push_str(&Self::legend_entry(label));
                markup.push('\n');
            }
        }
        markup.push_str(&self.axis_footer());

        debug!(
            plot = self.canvas.document().name(),
            series = series.len();
            "Plotted axis"
        );
        self.canvas.document_mut().set_content(markup);
    }

    /// Returns the tick positions for `series` under this printer's configuration.
    pub fn x_ticks(&self, series: &[Series], count: usize) -> Vec<f64> {
        x_ticks(series, count, self.config.truncate_ticks())
    }

    /// Returns the marker style assigned to `label`.
    ///
    /// # Errors
    ///
    /// Returns [`TexError::UnknownSeries`] if no series was plotted under `label`.
    pub fn marker(&self, label: &str) -> Result<&str, TexError> {
        self.palette.lookup(label)
    }

    /// Returns the opening of the `axis` environment.
    pub fn axis_header(&self, series: &[Series], axis: &AxisLabels) -> String {
        let precision = self.config.precision();
        let mut header = String::from("\\begin{axis}[");

        if let Some(title) = axis.title() {
            header.push_str(&format!("title={{{title}}},"));
        }
        header.push_str("yticklabel style={rotate=90,anchor=base,yshift=0.2cm}, ");
        header.push_str("scaled ticks=false,grid=none,");
        if let Some(x_label) = axis.x_label() {
            header.push_str(&format!("xlabel={{{x_label}}},"));
        }

        let ticks = self.x_ticks(series, self.config.tick_count());
        if let (Some(&first), Some(&last)) = (ticks.first(), ticks.last()) {
            let step = if ticks.len() > 1 { ticks[1] - ticks[0] } else { 0.0 };
            let positions = ticks
                .iter()
                .map(|&tick| precision.format(tick))
                .collect::<Vec<_>>()
                .join(",");
            header.push_str(&format!(
                "xtick={{{positions}}}, xmin={},xmax={},",
                precision.format(first - step / 2.0),
                precision.format(last + step / 2.0)
            ));
        }

        header.push_str("ylabel near ticks,");
        if let Some(y_label) = axis.y_label() {
            header.push_str(&format!("ylabel={{{y_label}}},"));
        }
        header.push_str(&format!(
            "legend pos={},",
            self.config.legend_position()
        ));
        header.push(']');
        header
    }

    /// Returns `\end{axis}` and the `plots:<name>` label.
    pub fn axis_footer(&self) -> String {
        format!(
            "\n\n\\end{{axis}}\n\n\\label{{plots:{}}}",
            self.canvas.document().name()
        )
    }

    /// Returns the opening of an `\addplot` with the marker of `label`.
    pub fn plot_header(&mut self, label: &str) -> String {
        format!(
            "\n\n\\addplot[solid,{}] coordinates {{\n",
            self.palette.assign(label)
        )
    }

    pub fn plot_footer() -> &'static str {
        "}node [pos=1.15, above left] {};\n\n"
    }

    /// Returns `\addlegendentry{\texttt{<label>}}`.
    pub fn legend_entry(label: &str) -> String {
        format!("\\addlegendentry{{{}}}", texttt(label))
    }

    /// Returns a reference to the legend named after this plot's caption.
    pub fn legend_ref(&self) -> String {
        let caption = self.canvas.document().caption().unwrap_or_default();
        format!("\\ref{{{}-legend}}", remove_spaces(caption))
    }

    fn coordinate(&self, point: Point) -> String {
        let precision = self.config.precision();
        format!(
            "({},{})\n",
            precision.format(point.x()),
            precision.format(point.y())
        )
    }
}

impl Printer for PlotPrinter {
    fn document(&self) -> &Document {
        self.canvas.document()
    }

    fn document_mut(&mut self) -> &mut Document {
        self.canvas.document_mut()
    }
}
