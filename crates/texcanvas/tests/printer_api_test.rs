//! Integration tests for the printer API
//!
//! These tests build documents through the public API only and check the
//! files written to disk.

use std::fs;

use tempfile::tempdir;

use texcanvas::{
    AxisLabels, CaptionPlacement, ColorError, Document, DocumentClass, ErrorKind, GeometryError,
    GraphPrinter, PlotPrinter, Printer, Series, TexError,
    geometry::{Edge, Point},
    style::StyleOptions,
};

fn triangle() -> [Point; 3] {
    [
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(2.0, 3.0),
    ]
}

#[test]
fn test_compose_two_documents_inline() {
    let dir = tempdir().expect("Failed to create temp directory");

    let mut graph = GraphPrinter::new(dir.path().join("graph"));
    graph
        .draw_edges(&[Edge::new(0, 1)], &triangle(), &StyleOptions::new())
        .expect("Failed to draw edges");

    let mut plot = PlotPrinter::new(dir.path().join("plot"));
    plot.plot_axis(
        &[Series::from(vec![(0.0, 0.0), (1.0, 1.0)])],
        &["linear"],
        &AxisLabels::new(),
    );

    let mut report = Document::new(dir.path().join("report"), DocumentClass::Article);
    report.add_to_document(&graph, false).expect("Failed to add graph");
    report.add_to_document(&plot, false).expect("Failed to add plot");

    let content = report.content();
    assert_eq!(content.matches("\\input{").count(), 2);
    let graph_at = content.find("graph_body").expect("graph is included");
    let plot_at = content.find("plot_body").expect("plot is included");
    assert!(graph_at < plot_at, "children keep call order");

    for color in graph.document().colors().iter().chain(plot.document().colors()) {
        assert!(report.colors().contains(color.as_str()), "missing {color}");
    }
    assert_eq!(
        report.colors().len(),
        graph
            .document()
            .colors()
            .iter()
            .chain(plot.document().colors())
            .map(|c| c.as_str())
            .collect::<std::collections::HashSet<_>>()
            .len()
    );

    let graph_body = fs::read_to_string(dir.path().join("graph_body.tex"))
        .expect("Failed to read graph body");
    assert_eq!(graph_body, graph.document().body_text());
    assert!(dir.path().join("plot_body.tex").exists());
}

#[test]
fn test_saved_document_is_complete() {
    let dir = tempdir().expect("Failed to create temp directory");

    let mut graph = GraphPrinter::new(dir.path().join("spanner"));
    let points = triangle();
    graph.autoscale(points, 10.0).expect("Failed to autoscale");
    let style = graph.style().clone();
    graph
        .draw_edges(
            &[Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 0)],
            &points,
            style.active_edge(),
        )
        .expect("Failed to draw edges");
    graph.draw_vertices(&points, style.active_vertex(), style.border());

    let path = graph.save().expect("Failed to save");
    let text = fs::read_to_string(path).expect("Failed to read document");

    assert!(text.starts_with("\\documentclass{standalone}"));
    assert!(text.contains("\\definecolor{0000ff}{RGB}{ 0, 0, 255 }"));
    assert!(text.contains("\\begin{tikzpicture}[vertex/.style"));
    assert!(text.contains("(10.000000,0.000000)"));
    assert_eq!(text.matches("\\draw [color=000000,line width=0.600000]").count(), 3);
    assert!(text.ends_with("\\end{tikzpicture}\n\n\\end{document}"));
}

#[test]
fn test_figure_with_caption() {
    let dir = tempdir().expect("Failed to create temp directory");

    let mut plot = PlotPrinter::new(dir.path().join("stretch"));
    plot.set_caption("Stretch factor");
    plot.plot_axis(&[Series::from(vec![(1.0, 1.5)])], &["greedy"], &AxisLabels::new());

    let mut report = Document::new(dir.path().join("report"), DocumentClass::Article);
    report
        .add_to_document_as_figure(&plot, false, CaptionPlacement::Below)
        .expect("Failed to add figure");
    report.clear_page();

    let path = report.save().expect("Failed to save");
    let text = fs::read_to_string(path).expect("Failed to read report");
    assert!(text.contains("\\begin{figure}[ht]\n\\centering\n\n\\input{"));
    assert!(text.contains("\\caption{Stretch factor}\n\\end{figure}\n\\clearpage\n\n"));
}

#[test]
fn test_errors_are_classified() {
    let mut graph = GraphPrinter::new("unused");
    let err = graph
        .autoscale(Vec::<Point>::new(), 10.0)
        .expect_err("empty point sets cannot be scaled");
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(matches!(err, TexError::Geometry(GeometryError::EmptyPointSet)));

    let err = graph
        .autoscale([Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0)], 10.0)
        .expect_err("NaN coordinates cannot be scaled");
    assert!(matches!(
        err,
        TexError::Geometry(GeometryError::NonFiniteCoordinate)
    ));

    let err = graph
        .draw_edges(&[Edge::new(0, 5)], &triangle(), &StyleOptions::new())
        .expect_err("edge is out of range");
    assert_eq!(err.kind(), ErrorKind::Configuration);

    let mut report = Document::new("unused", DocumentClass::Article);
    let err = report
        .define_color("12345g")
        .expect_err("malformed hex");
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(matches!(err, TexError::Color(ColorError::InvalidDigit(_))));
}
