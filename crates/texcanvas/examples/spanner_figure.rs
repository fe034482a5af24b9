//! Example: Drawing a small spanner and a plot into one report
//!
//! This example builds a graph drawing and a plot, embeds both into an
//! article as figures, and writes `report.tex` into the current directory.
//! Pass `--compile` to run pdflatex on the result.

use texcanvas::{
    AxisLabels, CaptionPlacement, Document, DocumentClass, GraphPrinter, PlotPrinter, Printer,
    Series,
    geometry::{Edge, Point},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let compile = std::env::args().any(|arg| arg == "--compile");

    // A point set and a path through it
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(2.0, 1.0),
        Point::new(4.0, 0.5),
        Point::new(3.0, 3.0),
        Point::new(1.0, 2.5),
    ];
    let edges = [
        Edge::new(0, 1),
        Edge::new(1, 2),
        Edge::new(2, 3),
        Edge::new(3, 4),
        Edge::new(4, 0),
        Edge::new(1, 3),
    ];
    let path = [Edge::new(0, 1), Edge::new(1, 3)];

    let mut graph = GraphPrinter::new("spanner");
    graph.autoscale(points.iter().copied(), 10.0)?;
    let style = graph.style().clone();

    graph.draw_edges(&edges, &points, style.inactive_edge())?;
    graph.draw_edges(&path, &points, style.highlight_edge())?;
    graph.draw_cones(points[1], points[2], 6, 1.0, style.cone())?;
    graph.draw_vertices_with_info(&points, style.active_vertex(), style.border());
    graph.set_caption("Spanner with a highlighted path");

    // Runtime of two algorithms
    let mut plot = PlotPrinter::new("runtime");
    let series = [
        Series::from(vec![(100.0, 0.01), (200.0, 0.03), (400.0, 0.09)]),
        Series::from(vec![(100.0, 0.02), (200.0, 0.04), (400.0, 0.08)]),
    ];
    plot.plot_axis(
        &series,
        &["greedy", "theta"],
        &AxisLabels::new()
            .with_x_label("$n$")
            .with_y_label("Average execution time (s)"),
    );
    plot.set_caption("Runtime");

    let mut report = Document::new("report", DocumentClass::Article);
    report.add_to_document_as_figure(&graph, false, CaptionPlacement::Below)?;
    report.add_to_document_as_figure(&plot, false, CaptionPlacement::Below)?;

    let tex = report.save()?;
    println!("Wrote {}", tex.display());

    if compile {
        let pdf = report.compile()?;
        println!("Compiled {}", pdf.display());
    }

    Ok(())
}
