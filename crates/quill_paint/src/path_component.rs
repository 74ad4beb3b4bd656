//! Curve components stored by [`Path`](crate::path::Path)
//!
//! Each component knows how to evaluate itself, flatten itself into a
//! polyline within a chord-error tolerance, and report the points that bound
//! it (end points plus analytic interior extrema).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::geometry::Point;

/// Bounds how far a flattened polyline may stray from the true curve.
///
/// The effective tolerance in path space is `tolerance / scale`, so callers
/// drawing under a magnifying transform pass its scale factor to keep the
/// on-screen error constant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingApproximation {
    pub scale: f32,
    pub tolerance: f32,
    pub max_subdivisions: u32,
}

impl Default for SmoothingApproximation {
    fn default() -> Self {
        Self {
            scale: 1.0,
            tolerance: 0.1,
            max_subdivisions: 512,
        }
    }
}

impl SmoothingApproximation {
    pub fn new(scale: f32, tolerance: f32) -> Self {
        Self {
            scale,
            tolerance,
            ..Default::default()
        }
    }

    pub fn effective_tolerance(&self) -> f32 {
        let scale = if self.scale > 0.0 { self.scale } else { 1.0 };
        (self.tolerance / scale).max(f32::EPSILON)
    }

    /// Number of uniform subdivisions needed for a curve whose second
    /// difference is bounded by `second_difference`, given that the chord
    /// error of `n` uniform steps is `second_difference / (4 n^2)` scaled by
    /// `factor`.
    fn subdivisions(&self, second_difference: f32, factor: f32) -> u32 {
        let n = (factor * second_difference / (4.0 * self.effective_tolerance()))
            .sqrt()
            .ceil();
        if n.is_finite() {
            (n as u32).clamp(1, self.max_subdivisions.max(1))
        } else {
            self.max_subdivisions.max(1)
        }
    }
}

/// Points that bound a component
pub type Extrema = SmallVec<[Point; 6]>;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LinearPathComponent {
    pub p1: Point,
    pub p2: Point,
}

impl LinearPathComponent {
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    pub fn solve(&self, t: f32) -> Point {
        self.p1.lerp(self.p2, t)
    }

    pub fn create_polyline(&self) -> Vec<Point> {
        vec![self.p1, self.p2]
    }

    pub fn extrema(&self) -> Extrema {
        SmallVec::from_slice(&[self.p1, self.p2])
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct QuadraticPathComponent {
    pub p1: Point,
    pub cp: Point,
    pub p2: Point,
}

impl QuadraticPathComponent {
    pub const fn new(p1: Point, cp: Point, p2: Point) -> Self {
        Self { p1, cp, p2 }
    }

    pub fn solve(&self, t: f32) -> Point {
        let mt = 1.0 - t;
        self.p1 * (mt * mt) + self.cp * (2.0 * mt * t) + self.p2 * (t * t)
    }

    pub fn create_polyline(&self, approximation: &SmoothingApproximation) -> Vec<Point> {
        let second_difference = (self.p1 - self.cp * 2.0 + self.p2).length();
        let steps = approximation.subdivisions(second_difference, 1.0);
        flatten(steps, |t| self.solve(t), self.p2)
    }

    pub fn extrema(&self) -> Extrema {
        let mut points: Extrema = SmallVec::from_slice(&[self.p1, self.p2]);
        // B'(t) = 0  =>  t = (p1 - cp) / (p1 - 2cp + p2), per axis.
        let a = self.p1 - self.cp * 2.0 + self.p2;
        let b = self.p1 - self.cp;
        for (num, den) in [(b.x, a.x), (b.y, a.y)] {
            if den.abs() > f32::EPSILON {
                let t = num / den;
                if t > 0.0 && t < 1.0 {
                    points.push(self.solve(t));
                }
            }
        }
        points
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CubicPathComponent {
    pub p1: Point,
    pub cp1: Point,
    pub cp2: Point,
    pub p2: Point,
}

impl CubicPathComponent {
    pub const fn new(p1: Point, cp1: Point, cp2: Point, p2: Point) -> Self {
        Self { p1, cp1, cp2, p2 }
    }

    pub fn solve(&self, t: f32) -> Point {
        let mt = 1.0 - t;
        self.p1 * (mt * mt * mt)
            + self.cp1 * (3.0 * mt * mt * t)
            + self.cp2 * (3.0 * mt * t * t)
            + self.p2 * (t * t * t)
    }

    pub fn create_polyline(&self, approximation: &SmoothingApproximation) -> Vec<Point> {
        let d1 = (self.p1 - self.cp1 * 2.0 + self.cp2).length();
        let d2 = (self.cp1 - self.cp2 * 2.0 + self.p2).length();
        // |B''| <= 6 * max(d1, d2), so the chord error is at most 3/4 of that
        // over n^2.
        let steps = approximation.subdivisions(d1.max(d2), 3.0);
        flatten(steps, |t| self.solve(t), self.p2)
    }

    pub fn extrema(&self) -> Extrema {
        let mut points: Extrema = SmallVec::from_slice(&[self.p1, self.p2]);

        // B'(t) / 3 = a t^2 + b t + c
        let d0 = self.cp1 - self.p1;
        let d1 = self.cp2 - self.cp1;
        let d2 = self.p2 - self.cp2;
        let a = d0 - d1 * 2.0 + d2;
        let b = (d1 - d0) * 2.0;
        let c = d0;

        for (a, b, c) in [(a.x, b.x, c.x), (a.y, b.y, c.y)] {
            for t in quadratic_roots(a, b, c) {
                if t > 0.0 && t < 1.0 {
                    points.push(self.solve(t));
                }
            }
        }
        points
    }
}

fn flatten(steps: u32, solve: impl Fn(f32) -> Point, end: Point) -> Vec<Point> {
    let mut points = Vec::with_capacity(steps as usize + 1);
    for i in 0..steps {
        points.push(solve(i as f32 / steps as f32));
    }
    // Land exactly on the end point so adjacent components share it.
    points.push(end);
    points
}

fn quadratic_roots(a: f32, b: f32, c: f32) -> SmallVec<[f32; 2]> {
    let mut roots = SmallVec::new();
    if a.abs() <= f32::EPSILON {
        if b.abs() > f32::EPSILON {
            roots.push(-c / b);
        }
        return roots;
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return roots;
    }
    let sqrt = discriminant.sqrt();
    roots.push((-b + sqrt) / (2.0 * a));
    if sqrt > 0.0 {
        roots.push((-b - sqrt) / (2.0 * a));
    }
    roots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(points: &[Point]) -> (Point, Point) {
        points[1..]
            .iter()
            .fold((points[0], points[0]), |(min, max), p| (min.min(*p), max.max(*p)))
    }

    #[test]
    fn test_quadratic_extrema_include_apex() {
        let quad = QuadraticPathComponent::new(
            Point::new(0.0, 0.0),
            Point::new(50.0, 100.0),
            Point::new(100.0, 0.0),
        );
        let (min, max) = bounds(&quad.extrema());
        assert_eq!(min, Point::new(0.0, 0.0));
        assert!((max.y - 50.0).abs() < 1e-4);
        assert_eq!(max.x, 100.0);
    }

    #[test]
    fn test_cubic_extrema_include_bulge() {
        let cubic = CubicPathComponent::new(
            Point::new(0.0, 0.0),
            Point::new(0.0, 100.0),
            Point::new(100.0, 100.0),
            Point::new(100.0, 0.0),
        );
        let (min, max) = bounds(&cubic.extrema());
        assert_eq!(min, Point::new(0.0, 0.0));
        assert!((max.y - 75.0).abs() < 1e-3);
    }

    #[test]
    fn test_flattening_respects_tolerance() {
        let quad = QuadraticPathComponent::new(
            Point::new(0.0, 0.0),
            Point::new(50.0, 100.0),
            Point::new(100.0, 0.0),
        );
        let coarse = quad.create_polyline(&SmoothingApproximation::new(1.0, 10.0));
        let fine = quad.create_polyline(&SmoothingApproximation::new(1.0, 0.01));
        assert!(coarse.len() < fine.len());
        assert_eq!(coarse.first(), Some(&quad.p1));
        assert_eq!(fine.last(), Some(&quad.p2));

        // A larger scale demands more detail for the same tolerance.
        let scaled = quad.create_polyline(&SmoothingApproximation::new(100.0, 10.0));
        assert!(scaled.len() > coarse.len());
    }

    #[test]
    fn test_degenerate_curve_flattens_to_endpoints() {
        let p = Point::new(3.0, 4.0);
        let cubic = CubicPathComponent::new(p, p, p, p);
        let points = cubic.create_polyline(&SmoothingApproximation::default());
        assert_eq!(points, vec![p, p]);
        assert_eq!(cubic.extrema().len(), 2);
    }

    #[test]
    fn test_subdivisions_are_clamped() {
        let approximation = SmoothingApproximation {
            max_subdivisions: 8,
            ..SmoothingApproximation::new(1.0, 1e-6)
        };
        let quad = QuadraticPathComponent::new(
            Point::new(0.0, 0.0),
            Point::new(5000.0, 5000.0),
            Point::new(10000.0, 0.0),
        );
        assert_eq!(quad.create_polyline(&approximation).len(), 9);
    }
}
