//! Scene files: TOML descriptions of a graph drawing or a plot.
//!
//! ```toml
//! kind = "graph"
//! caption = "A triangle"
//! size = 10.0
//! points = [[0.0, 0.0], [4.0, 0.0], [2.0, 3.0]]
//! edges = [[0, 1], [1, 2], [2, 0]]
//! ```
//!
//! ```toml
//! kind = "plot"
//! caption = "Runtime"
//!
//! [axis]
//! x_label = "$n$"
//!
//! [[series]]
//! label = "greedy"
//! points = [[100.0, 0.01], [200.0, 0.03]]
//! ```

use std::path::Path;

use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use texcanvas::{
    AxisLabels, GraphPrinter, GraphStyle, PlotPrinter, Printer, Series, TexError,
    config::AppConfig,
    geometry::{Edge, Point},
};

/// Scene file errors
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Failed to parse scene: {0}")]
    Parse(String),
}

impl From<SceneError> for TexError {
    fn from(err: SceneError) -> Self {
        TexError::InvalidArgument(err.to_string())
    }
}

/// A drawing described by a scene file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Scene {
    Graph(GraphScene),
    Plot(PlotScene),
}

/// Points, edges and cones of a geometric graph.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GraphScene {
    caption: Option<String>,
    /// Autoscale target size; coordinates are used as given when unset.
    size: Option<f64>,
    /// Label vertices with their index.
    labels: bool,
    grid: bool,
    points: Vec<[f64; 2]>,
    edges: Vec<[usize; 2]>,
    triangulation: Vec<[usize; 2]>,
    highlight: Vec<[usize; 2]>,
    cones: Vec<ConeFan>,
}

/// A fan of cone boundaries around one point.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConeFan {
    center: [f64; 2],
    orientation: [f64; 2],
    count: usize,
    length: f64,
}

/// Labeled series plotted into one axis.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlotScene {
    caption: Option<String>,
    axis: AxisLabels,
    series: Vec<SeriesScene>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeriesScene {
    label: String,
    points: Vec<[f64; 2]>,
}

impl Scene {
    /// Parses a scene from TOML text.
    pub fn from_toml(source: &str) -> Result<Self, SceneError> {
        toml::from_str(source).map_err(|err| SceneError::Parse(err.to_string()))
    }

    /// Renders the scene into a printer writing to `output`.
    pub fn render(
        &self,
        output: &Path,
        config: &AppConfig,
    ) -> Result<Box<dyn Printer>, TexError> {
        let mut printer: Box<dyn Printer> = match self {
            Self::Graph(scene) => Box::new(scene.render(output, config)?),
            Self::Plot(scene) => Box::new(scene.render(output, config)),
        };
        printer
            .document_mut()
            .set_toolchain(config.toolchain().clone());
        Ok(printer)
    }
}

fn to_edges(pairs: &[[usize; 2]]) -> Vec<Edge> {
    pairs.iter().map(|&[s, t]| Edge::new(s, t)).collect()
}

fn to_point([x, y]: [f64; 2]) -> Point {
    Point::new(x, y)
}

impl GraphScene {
    fn render(&self, output: &Path, config: &AppConfig) -> Result<GraphPrinter, TexError> {
        let style = GraphStyle::from_config(config.graph());
        let mut graph = GraphPrinter::with_style(output, style.clone());
        let points: Vec<Point> = self.points.iter().copied().map(to_point).collect();

        if let Some(size) = self.size {
            graph.autoscale(points.iter().copied(), size)?;
        }
        if let Some(caption) = &self.caption {
            graph.set_caption(caption);
        }
        if self.grid {
            graph.draw_grid();
        }

        graph.draw_edges(&to_edges(&self.triangulation), &points, style.triangulation_edge())?;
        graph.draw_edges(&to_edges(&self.edges), &points, style.active_edge())?;
        graph.draw_edges(&to_edges(&self.highlight), &points, style.highlight_edge())?;

        for fan in &self.cones {
            graph.draw_cones(
                to_point(fan.center),
                to_point(fan.orientation),
                fan.count,
                fan.length,
                style.cone(),
            )?;
        }

        if self.labels {
            graph.draw_vertices_with_info(&points, style.active_vertex(), style.border());
        } else {
            graph.draw_vertices(&points, style.active_vertex(), style.border());
        }

        info!(
            points = points.len(),
            edges = self.edges.len(),
            cones = self.cones.len();
            "Rendered graph scene"
        );
        Ok(graph)
    }
}

impl PlotScene {
    fn render(&self, output: &Path, config: &AppConfig) -> PlotPrinter {
        let mut plot = PlotPrinter::with_config(output, config.plot().clone());

        let series: Vec<Series> = self
            .series
            .iter()
            .map(|s| Series::new(s.points.iter().copied().map(to_point).collect()))
            .collect();
        let labels: Vec<&str> = self.series.iter().map(|s| s.label.as_str()).collect();

        if let Some(caption) = &self.caption {
            plot.set_caption(caption);
        }
        plot.plot_axis(&series, &labels, &self.axis);

        debug!(series = series.len(); "Rendered plot scene");
        plot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_graph_scene() {
        let scene = Scene::from_toml(
            r#"
            kind = "graph"
            size = 5.0
            points = [[0.0, 0.0], [1.0, 1.0]]
            edges = [[0, 1]]

            [[cones]]
            center = [0.0, 0.0]
            orientation = [1.0, 0.0]
            count = 4
            length = 0.5
            "#,
        )
        .unwrap();

        let Scene::Graph(graph) = scene else {
            panic!("Expected a graph scene");
        };
        assert_eq!(graph.size, Some(5.0));
        assert_eq!(graph.edges, vec![[0, 1]]);
        assert_eq!(graph.cones.len(), 1);
    }

    #[test]
    fn test_parse_plot_scene() {
        let scene = Scene::from_toml(
            r#"
            kind = "plot"

            [axis]
            y_label = "time"

            [[series]]
            label = "greedy"
            points = [[1.0, 2.0]]
            "#,
        )
        .unwrap();

        let Scene::Plot(plot) = scene else {
            panic!("Expected a plot scene");
        };
        assert_eq!(plot.axis, AxisLabels::new().with_y_label("time"));
        assert_eq!(plot.series[0].label, "greedy");
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = Scene::from_toml("kind = \"table\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse scene"));
    }

    #[test]
    fn test_render_graph_scene() {
        let scene = Scene::from_toml(
            r#"
            kind = "graph"
            caption = "Path"
            size = 10.0
            labels = true
            points = [[0.0, 0.0], [2.0, 0.0], [2.0, 1.0]]
            edges = [[0, 1]]
            highlight = [[1, 2]]
            "#,
        )
        .unwrap();

        let printer = scene
            .render(Path::new("path"), &AppConfig::default())
            .unwrap();
        let content = printer.document().content();
        assert!(content.contains("% Path\n"));
        assert!(content.contains("\\draw [color=000000,line width=0.600000] (0.000000,0.000000) -- (10.000000,0.000000);"));
        assert!(content.contains("\\draw [color=ff0000,line width=0.600000]"));
        assert!(content.contains("(vertex2)"));
    }

    #[test]
    fn test_render_graph_with_bad_edge() {
        let scene = Scene::from_toml(
            r#"
            kind = "graph"
            points = [[0.0, 0.0]]
            edges = [[0, 3]]
            "#,
        )
        .unwrap();
        assert!(matches!(
            scene.render(Path::new("bad"), &AppConfig::default()),
            Err(TexError::EdgeOutOfRange { .. })
        ));
    }
}
