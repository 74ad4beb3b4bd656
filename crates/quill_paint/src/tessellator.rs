//! Polyline tessellation for GPU rendering
//!
//! Converts flattened contours into a triangle list using lyon's fill
//! tessellator. Output is de-indexed: the callback receives three vertices per
//! triangle, ready for a non-indexed draw.

use lyon::math::point;
use lyon::path::Path as LyonPath;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillRule, FillTessellator, FillVertex, VertexBuffers,
};
use thiserror::Error;

use crate::geometry::Point;
use crate::path::{FillType, Polyline};

/// Default lyon fill tolerance, in path units
pub const DEFAULT_FILL_TOLERANCE: f32 = 0.1;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TessellationError {
    #[error("fill tessellation failed: {0}")]
    Failed(String),
}

impl From<FillType> for FillRule {
    fn from(fill_type: FillType) -> Self {
        match fill_type {
            FillType::NonZero => FillRule::NonZero,
            FillType::Odd => FillRule::EvenOdd,
        }
    }
}

/// Triangulates polylines under a fill rule
#[derive(Clone, Copy, Debug)]
pub struct Tessellator {
    fill_type: FillType,
    tolerance: f32,
}

impl Tessellator {
    pub fn new(fill_type: FillType) -> Self {
        Self {
            fill_type,
            tolerance: DEFAULT_FILL_TOLERANCE,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn fill_type(&self) -> FillType {
        self.fill_type
    }

    /// Calls `emit` once per output vertex, three per triangle.
    ///
    /// Every contour is treated as closed. Contours with fewer than three
    /// points enclose no area and are skipped, so degenerate input produces
    /// no vertices rather than an error.
    pub fn tessellate(
        &self,
        polyline: &Polyline,
        mut emit: impl FnMut(Point),
    ) -> Result<(), TessellationError> {
        let mut builder = LyonPath::builder();
        let mut has_contours = false;
        for contour in polyline.contours() {
            // Explicitly closed contours repeat their first point.
            let contour = match contour {
                [first, .., last] if first == last => &contour[..contour.len() - 1],
                _ => contour,
            };
            if contour.len() < 3 {
                continue;
            }
            builder.begin(point(contour[0].x, contour[0].y));
            for p in &contour[1..] {
                builder.line_to(point(p.x, p.y));
            }
            builder.end(true);
            has_contours = true;
        }
        if !has_contours {
            return Ok(());
        }
        let lyon_path = builder.build();

        let mut geometry: VertexBuffers<Point, u32> = VertexBuffers::new();
        let options = FillOptions::default()
            .with_fill_rule(self.fill_type.into())
            .with_tolerance(self.tolerance);

        let result = FillTessellator::new().tessellate_path(
            &lyon_path,
            &options,
            &mut BuffersBuilder::new(&mut geometry, |vertex: FillVertex| {
                let position = vertex.position();
                Point::new(position.x, position.y)
            }),
        );

        if let Err(err) = result {
            tracing::warn!("Polyline fill tessellation failed: {:?}", err);
            return Err(TessellationError::Failed(format!("{err:?}")));
        }

        for index in geometry.indices {
            emit(geometry.vertices[index as usize]);
        }
        Ok(())
    }
}
