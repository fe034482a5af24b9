//! texcanvas - LaTeX documents with TikZ drawings and PGFPlots charts.
//!
//! Printers append LaTeX markup to an in-memory [`Document`], which can be
//! saved, embedded into another document, compiled with an external LaTeX
//! compiler and opened in a PDF viewer.
//!
//! - [`Document`]: preamble, body, color registry and file output
//! - [`Canvas`]: a standalone `tikzpicture` with coordinate autoscaling
//! - [`GraphPrinter`]: vertices, edges and cones of geometric graphs
//! - [`PlotPrinter`]: series plotted into a PGFPlots axis
//!
//! # Example
//!
//! ```rust,no_run
//! use texcanvas::{CaptionPlacement, Document, DocumentClass, GraphPrinter, Printer};
//! use texcanvas::geometry::{Edge, Point};
//!
//! let points = [Point::new(0.0, 0.0), Point::new(3.0, 1.0), Point::new(1.0, 2.0)];
//! let edges = [Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 0)];
//!
//! let mut graph = GraphPrinter::new("out/triangle");
//! graph.autoscale(points, 10.0).expect("Failed to autoscale");
//! let style = graph.style().clone();
//! graph.draw_edges(&edges, &points, style.active_edge()).expect("Invalid edge");
//! graph.draw_vertices(&points, style.active_vertex(), style.border());
//! graph.set_caption("A triangle");
//!
//! let mut report = Document::new("out/report", DocumentClass::Article);
//! report
//!     .add_to_document_as_figure(&graph, false, CaptionPlacement::Below)
//!     .expect("Failed to embed graph");
//! report.compile().expect("Failed to compile report");
//! ```

pub mod config;
pub mod markup;
pub mod plot;

mod canvas;
mod document;
mod error;
mod graph;
mod palette;
mod toolchain;

pub use texcanvas_core::{color, geometry, number, scale, style};

pub use canvas::Canvas;
pub use document::{CaptionPlacement, Document, DocumentClass, Printer};
pub use error::{ColorError, ErrorKind, GeometryError, TexError};
pub use graph::{GraphPrinter, GraphStyle};
pub use palette::{MARKER_STYLES, MARKS, PLOT_COLORS, PaletteAllocator};
pub use plot::{AxisLabels, PlotPrinter, Series};
pub use toolchain::Toolchain;
