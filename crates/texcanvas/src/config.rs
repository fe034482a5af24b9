//! Configuration types for texcanvas printers.
//!
//! All types implement [`serde::Deserialize`] and fall back to defaults for
//! every missing field, so an empty TOML file is a valid configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`Toolchain`] - Compiler and viewer programs.
//! - [`GraphConfig`] - Colors and sizes of the default graph styles.
//! - [`PlotConfig`] - Tick, legend and number formatting for plots.
//!
//! # Example
//!
//! ```
//! # use texcanvas::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.plot().tick_count(), 5);
//! assert_eq!(config.graph().vertex_radius(), 0.05);
//! ```

use serde::Deserialize;

use texcanvas_core::color::HexColor;

use crate::{markup::Precision, toolchain::Toolchain};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    toolchain: Toolchain,

    #[serde(default)]
    graph: GraphConfig,

    #[serde(default)]
    plot: PlotConfig,
}

impl AppConfig {
    pub fn new(toolchain: Toolchain, graph: GraphConfig, plot: PlotConfig) -> Self {
        Self {
            toolchain,
            graph,
            plot,
        }
    }

    pub fn toolchain(&self) -> &Toolchain {
        &self.toolchain
    }

    pub fn graph(&self) -> &GraphConfig {
        &self.graph
    }

    pub fn plot(&self) -> &PlotConfig {
        &self.plot
    }
}

fn default_color(hex: &str) -> HexColor {
    HexColor::new(hex).expect("default colors are valid six digit hex")
}

/// Color scheme and sizes used to build a [`GraphStyle`](crate::GraphStyle).
///
/// Colors accept six hex digits or any CSS color, which is converted to hex.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    active_edge: HexColor,
    inactive_edge: HexColor,
    triangulation_edge: HexColor,
    highlight: HexColor,
    active_vertex: HexColor,
    inactive_vertex: HexColor,
    background: HexColor,
    text: HexColor,

    /// Vertex radius in centimeters.
    vertex_radius: f64,
    active_edge_width: f64,
    inactive_edge_width: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            active_edge: default_color("000000"),
            inactive_edge: default_color("bbbbbb"),
            triangulation_edge: default_color("dddddd"),
            highlight: default_color("ff0000"),
            active_vertex: default_color("0000ff"),
            inactive_vertex: default_color("f7b267"),
            background: default_color("FEFEF6"),
            text: default_color("111116"),
            vertex_radius: 0.05,
            active_edge_width: 0.6,
            inactive_edge_width: 0.4,
        }
    }
}

impl GraphConfig {
    pub fn active_edge(&self) -> &HexColor {
        &self.active_edge
    }

    pub fn inactive_edge(&self) -> &HexColor {
        &self.inactive_edge
    }

    pub fn triangulation_edge(&self) -> &HexColor {
        &self.triangulation_edge
    }

    pub fn highlight(&self) -> &HexColor {
        &self.highlight
    }

    pub fn active_vertex(&self) -> &HexColor {
        &self.active_vertex
    }

    pub fn inactive_vertex(&self) -> &HexColor {
        &self.inactive_vertex
    }

    pub fn background(&self) -> &HexColor {
        &self.background
    }

    pub fn text(&self) -> &HexColor {
        &self.text
    }

    pub fn vertex_radius(&self) -> f64 {
        self.vertex_radius
    }

    pub fn active_edge_width(&self) -> f64 {
        self.active_edge_width
    }

    pub fn inactive_edge_width(&self) -> f64 {
        self.inactive_edge_width
    }

    /// Returns every color of the scheme, in declaration order.
    pub fn colors(&self) -> [&HexColor; 8] {
        [
            &self.active_edge,
            &self.inactive_edge,
            &self.triangulation_edge,
            &self.highlight,
            &self.active_vertex,
            &self.inactive_vertex,
            &self.background,
            &self.text,
        ]
    }
}

/// Axis and number formatting for plots.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Number of x ticks; zero disables the tick list.
    tick_count: usize,

    /// Truncate tick positions toward zero.
    truncate_ticks: bool,

    /// Emit `\addlegendentry` after every series.
    legend: bool,

    /// Fractional digits for coordinates; six when unset.
    precision: Option<usize>,

    /// `scale` option of the plot's tikzpicture.
    scale: String,

    legend_position: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            tick_count: 5,
            truncate_ticks: true,
            legend: false,
            precision: None,
            scale: "0.55".to_string(),
            legend_position: "north west".to_string(),
        }
    }
}

impl PlotConfig {
    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    pub fn truncate_ticks(&self) -> bool {
        self.truncate_ticks
    }

    pub fn legend(&self) -> bool {
        self.legend
    }

    pub fn precision(&self) -> Precision {
        Precision(self.precision)
    }

    pub fn scale(&self) -> &str {
        &self.scale
    }

    pub fn legend_position(&self) -> &str {
        &self.legend_position
    }

    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    pub fn with_truncate_ticks(mut self, truncate_ticks: bool) -> Self {
        self.truncate_ticks = truncate_ticks;
        self
    }

    pub fn with_legend(mut self, legend: bool) -> Self {
        self.legend = legend;
        self
    }

    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_defaults() {
        let graph = GraphConfig::default();
        assert_eq!(graph.background().as_str(), "FEFEF6");
        assert_eq!(graph.colors().len(), 8);
        assert_eq!(graph.active_edge_width(), 0.6);
    }

    #[test]
    fn test_plot_defaults() {
        let plot = PlotConfig::default();
        assert!(plot.truncate_ticks());
        assert!(!plot.legend());
        assert_eq!(plot.precision(), Precision(None));
        assert_eq!(plot.scale(), "0.55");
    }

    #[test]
    fn test_builder_overrides() {
        let plot = PlotConfig::default()
            .with_tick_count(3)
            .with_truncate_ticks(false)
            .with_legend(true)
            .with_precision(Some(2));
        assert_eq!(plot.tick_count(), 3);
        assert!(!plot.truncate_ticks());
        assert!(plot.legend());
        assert_eq!(plot.precision(), Precision(Some(2)));
    }
}
