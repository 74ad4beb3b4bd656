//! Builder for constructing paths with pen-style commands

use crate::geometry::{Point, Rect};
use crate::path::{FillType, Path};

/// Control point distance for approximating a quarter circle with a cubic
const ARC_APPROXIMATION_MAGIC: f32 = 0.551_915_05;

/// Builder for constructing paths
///
/// Each `move_to` starts a new contour in the resulting [`Path`].
#[derive(Clone, Debug, Default)]
pub struct PathBuilder {
    path: Path,
    current: Point,
    subpath_start: Point,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_point(&self) -> Point {
        self.current
    }

    pub fn move_to(mut self, point: Point) -> Self {
        self.path.add_path_segment();
        self.current = point;
        self.subpath_start = point;
        self
    }

    pub fn line_to(mut self, point: Point) -> Self {
        self.path.add_linear_component(self.current, point);
        self.current = point;
        self
    }

    pub fn horizontal_line_to(self, x: f32) -> Self {
        let y = self.current.y;
        self.line_to(Point::new(x, y))
    }

    pub fn vertical_line_to(self, y: f32) -> Self {
        let x = self.current.x;
        self.line_to(Point::new(x, y))
    }

    pub fn quadratic_curve_to(mut self, control: Point, point: Point) -> Self {
        self.path
            .add_quadratic_component(self.current, control, point);
        self.current = point;
        self
    }

    pub fn cubic_curve_to(mut self, control1: Point, control2: Point, point: Point) -> Self {
        self.path
            .add_cubic_component(self.current, control1, control2, point);
        self.current = point;
        self
    }

    /// Closes the current contour with a straight line back to its start.
    pub fn close(self) -> Self {
        let start = self.subpath_start;
        let mut builder = if self.current != start {
            self.line_to(start)
        } else {
            self
        };
        builder.current = start;
        builder
    }

    pub fn add_rect(self, rect: Rect) -> Self {
        let [tl, tr, br, bl] = rect.corners();
        self.move_to(tl).line_to(tr).line_to(br).line_to(bl).close()
    }

    /// Adds an ellipse inscribed in `rect`, as four cubic arcs.
    pub fn add_oval(self, rect: Rect) -> Self {
        let r = Point::new(rect.size.width / 2.0, rect.size.height / 2.0);
        let c = rect.center();
        let m = r * ARC_APPROXIMATION_MAGIC;

        self.move_to(Point::new(c.x, c.y - r.y))
            .cubic_curve_to(
                Point::new(c.x + m.x, c.y - r.y),
                Point::new(c.x + r.x, c.y - m.y),
                Point::new(c.x + r.x, c.y),
            )
            .cubic_curve_to(
                Point::new(c.x + r.x, c.y + m.y),
                Point::new(c.x + m.x, c.y + r.y),
                Point::new(c.x, c.y + r.y),
            )
            .cubic_curve_to(
                Point::new(c.x - m.x, c.y + r.y),
                Point::new(c.x - r.x, c.y + m.y),
                Point::new(c.x - r.x, c.y),
            )
            .cubic_curve_to(
                Point::new(c.x - r.x, c.y - m.y),
                Point::new(c.x - m.x, c.y - r.y),
                Point::new(c.x, c.y - r.y),
            )
            .close()
    }

    pub fn add_circle(self, center: Point, radius: f32) -> Self {
        self.add_oval(Rect::new(
            center.x - radius,
            center.y - radius,
            radius * 2.0,
            radius * 2.0,
        ))
    }

    /// Adds a rect with uniformly rounded corners. The radius is clamped to
    /// half the shorter side.
    pub fn add_rounded_rect(self, rect: Rect, radius: f32) -> Self {
        let radius = radius
            .min(rect.size.width / 2.0)
            .min(rect.size.height / 2.0)
            .max(0.0);
        if radius == 0.0 {
            return self.add_rect(rect);
        }

        let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
        let m = radius * (1.0 - ARC_APPROXIMATION_MAGIC);

        self.move_to(Point::new(l + radius, t))
            .line_to(Point::new(r - radius, t))
            .cubic_curve_to(
                Point::new(r - m, t),
                Point::new(r, t + m),
                Point::new(r, t + radius),
            )
            .line_to(Point::new(r, b - radius))
            .cubic_curve_to(
                Point::new(r, b - m),
                Point::new(r - m, b),
                Point::new(r - radius, b),
            )
            .line_to(Point::new(l + radius, b))
            .cubic_curve_to(
                Point::new(l + m, b),
                Point::new(l, b - m),
                Point::new(l, b - radius),
            )
            .line_to(Point::new(l, t + radius))
            .cubic_curve_to(
                Point::new(l, t + m),
                Point::new(l + m, t),
                Point::new(l + radius, t),
            )
            .close()
    }

    pub fn fill_type(mut self, fill_type: FillType) -> Self {
        self.path.set_fill_type(fill_type);
        self
    }

    pub fn build(self) -> Path {
        self.path
    }
}
