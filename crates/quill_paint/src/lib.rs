//! Quill Paint
//!
//! Geometry for the Quill vector renderer: primitives, colors, paths made of
//! typed curve components, and polyline tessellation.
//!
//! # Features
//!
//! - Lines, quadratic and cubic curves grouped into contours
//! - Tolerance-bounded flattening into polylines
//! - Analytic bounding boxes
//! - Fill tessellation under non-zero and even-odd rules
//!
//! # Example
//!
//! ```rust
//! use quill_paint::{PathBuilder, Point, Rect, SmoothingApproximation, Tessellator};
//!
//! let path = PathBuilder::new()
//!     .add_rect(Rect::new(0.0, 0.0, 10.0, 10.0))
//!     .build();
//!
//! let mut vertices = Vec::new();
//! Tessellator::new(path.fill_type())
//!     .tessellate(&path.polyline(&SmoothingApproximation::default()), |p: Point| {
//!         vertices.push(p)
//!     })
//!     .unwrap();
//! assert_eq!(vertices.len() % 3, 0);
//! ```

pub mod color;
pub mod geometry;
pub mod path;
pub mod path_builder;
pub mod path_component;
pub mod tessellator;

pub use color::Color;
pub use geometry::{IRect, ISize, Matrix, Point, Radians, Rect, Size, Vector3};
pub use path::{
    ComponentType, FillType, Path, PathComponent, PathComponentVisitor, PathError, Polyline,
};
pub use path_builder::PathBuilder;
pub use path_component::{
    CubicPathComponent, LinearPathComponent, QuadraticPathComponent, SmoothingApproximation,
};
pub use tessellator::{TessellationError, Tessellator};
