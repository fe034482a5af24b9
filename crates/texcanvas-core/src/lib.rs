//! texcanvas core types and definitions
//!
//! This crate provides the value types shared by the texcanvas printers:
//!
//! - **Colors**: six-digit hex colors and a deduplicating registry ([`color`])
//! - **Geometry**: points, bounding boxes and the vertex/edge input contracts ([`geometry`])
//! - **Scaling**: the autoscale transform from input units to centimetres ([`scale`])
//! - **Styles**: ordered TikZ option lists ([`style`])
//! - **Numbers**: fixed-point formatting used by every emitted coordinate ([`number`])

pub mod color;
pub mod error;
pub mod geometry;
pub mod number;
pub mod scale;
pub mod style;
