//! Path representation
//!
//! A [`Path`] stores its curve components in type-segregated arenas and keeps
//! a separate ordered list of `(kind, index)` pairs that records draw order.
//! Contours ("segments") are delimited by component indices.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{Point, Rect};
use crate::path_component::{
    CubicPathComponent, LinearPathComponent, QuadraticPathComponent, SmoothingApproximation,
};

/// Fill rule applied when a path is tessellated for filling
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FillType {
    #[default]
    NonZero,
    /// Even-odd
    Odd,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentType {
    Linear,
    Quadratic,
    Cubic,
}

/// Errors from typed component access
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    #[error("component index {index} out of range (path has {count} components)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("component {index} is {found:?}, not {expected:?}")]
    TypeMismatch {
        index: usize,
        expected: ComponentType,
        found: ComponentType,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ComponentIndexPair {
    kind: ComponentType,
    index: usize,
}

/// A borrowed component, yielded in draw order by [`Path::components`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathComponent<'a> {
    Linear(&'a LinearPathComponent),
    Quadratic(&'a QuadraticPathComponent),
    Cubic(&'a CubicPathComponent),
}

impl PathComponent<'_> {
    pub fn kind(&self) -> ComponentType {
        match self {
            PathComponent::Linear(_) => ComponentType::Linear,
            PathComponent::Quadratic(_) => ComponentType::Quadratic,
            PathComponent::Cubic(_) => ComponentType::Cubic,
        }
    }

    pub fn create_polyline(&self, approximation: &SmoothingApproximation) -> Vec<Point> {
        match self {
            PathComponent::Linear(linear) => linear.create_polyline(),
            PathComponent::Quadratic(quad) => quad.create_polyline(approximation),
            PathComponent::Cubic(cubic) => cubic.create_polyline(approximation),
        }
    }
}

/// Receives components from [`Path::enumerate_components`].
///
/// Every method defaults to doing nothing, so a visitor only implements the
/// component types it cares about.
pub trait PathComponentVisitor {
    fn visit_linear(&mut self, _index: usize, _linear: &LinearPathComponent) {}

    fn visit_quadratic(&mut self, _index: usize, _quad: &QuadraticPathComponent) {}

    fn visit_cubic(&mut self, _index: usize, _cubic: &CubicPathComponent) {}
}

/// A flattened path: every contour's points back to back.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point>,
    /// Index into `points` of the first point of each contour after the first
    pub breaks: Vec<usize>,
}

impl Polyline {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point slices, one per contour. Breaks that run backwards or past the
    /// end of `points` yield no slice.
    pub fn contours(&self) -> impl Iterator<Item = &[Point]> + '_ {
        let starts = std::iter::once(0).chain(self.breaks.iter().copied());
        let ends = self
            .breaks
            .iter()
            .copied()
            .chain(std::iter::once(self.points.len()));
        starts
            .zip(ends)
            .filter_map(move |(start, end)| self.points.get(start..end))
    }
}

impl From<Vec<Point>> for Polyline {
    fn from(points: Vec<Point>) -> Self {
        Self {
            points,
            breaks: Vec::new(),
        }
    }
}

/// A 2D path made of line, quadratic and cubic components
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    components: Vec<ComponentIndexPair>,
    linears: Vec<LinearPathComponent>,
    quads: Vec<QuadraticPathComponent>,
    cubics: Vec<CubicPathComponent>,
    segment_indices: Vec<usize>,
    fill_type: FillType,
}

impl Default for Path {
    fn default() -> Self {
        Self::new()
    }
}

impl Path {
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
            linears: Vec::new(),
            quads: Vec::new(),
            cubics: Vec::new(),
            segment_indices: vec![0],
            fill_type: FillType::default(),
        }
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn segment_count(&self) -> usize {
        self.segment_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn fill_type(&self) -> FillType {
        self.fill_type
    }

    pub fn set_fill_type(&mut self, fill_type: FillType) -> &mut Self {
        self.fill_type = fill_type;
        self
    }

    pub fn add_linear_component(&mut self, p1: Point, p2: Point) -> &mut Self {
        self.linears.push(LinearPathComponent::new(p1, p2));
        self.components.push(ComponentIndexPair {
            kind: ComponentType::Linear,
            index: self.linears.len() - 1,
        });
        self
    }

    pub fn add_quadratic_component(&mut self, p1: Point, cp: Point, p2: Point) -> &mut Self {
        self.quads.push(QuadraticPathComponent::new(p1, cp, p2));
        self.components.push(ComponentIndexPair {
            kind: ComponentType::Quadratic,
            index: self.quads.len() - 1,
        });
        self
    }

    pub fn add_cubic_component(
        &mut self,
        p1: Point,
        cp1: Point,
        cp2: Point,
        p2: Point,
    ) -> &mut Self {
        self.cubics.push(CubicPathComponent::new(p1, cp1, cp2, p2));
        self.components.push(ComponentIndexPair {
            kind: ComponentType::Cubic,
            index: self.cubics.len() - 1,
        });
        self
    }

    /// Starts a new contour. Does nothing while the path has no components,
    /// so a path never begins with an empty contour.
    pub fn add_path_segment(&mut self) -> &mut Self {
        if !self.components.is_empty() {
            self.segment_indices.push(self.components.len());
        }
        self
    }

    /// Components in draw order
    pub fn components(&self) -> impl Iterator<Item = PathComponent<'_>> + '_ {
        self.components.iter().map(move |pair| self.resolve(*pair))
    }

    pub fn enumerate_components(&self, visitor: &mut impl PathComponentVisitor) {
        for (index, pair) in self.components.iter().enumerate() {
            match pair.kind {
                ComponentType::Linear => visitor.visit_linear(index, &self.linears[pair.index]),
                ComponentType::Quadratic => visitor.visit_quadratic(index, &self.quads[pair.index]),
                ComponentType::Cubic => visitor.visit_cubic(index, &self.cubics[pair.index]),
            }
        }
    }

    fn resolve(&self, pair: ComponentIndexPair) -> PathComponent<'_> {
        match pair.kind {
            ComponentType::Linear => PathComponent::Linear(&self.linears[pair.index]),
            ComponentType::Quadratic => PathComponent::Quadratic(&self.quads[pair.index]),
            ComponentType::Cubic => PathComponent::Cubic(&self.cubics[pair.index]),
        }
    }

    /// Looks up the store index for component `index`, checking its type.
    fn store_index(&self, index: usize, expected: ComponentType) -> Result<usize, PathError> {
        let pair = self
            .components
            .get(index)
            .ok_or(PathError::IndexOutOfRange {
                index,
                count: self.components.len(),
            })?;
        if pair.kind != expected {
            return Err(PathError::TypeMismatch {
                index,
                expected,
                found: pair.kind,
            });
        }
        Ok(pair.index)
    }

    pub fn linear_component_at(&self, index: usize) -> Result<LinearPathComponent, PathError> {
        let i = self.store_index(index, ComponentType::Linear)?;
        Ok(self.linears[i])
    }

    pub fn quadratic_component_at(
        &self,
        index: usize,
    ) -> Result<QuadraticPathComponent, PathError> {
        let i = self.store_index(index, ComponentType::Quadratic)?;
        Ok(self.quads[i])
    }

    pub fn cubic_component_at(&self, index: usize) -> Result<CubicPathComponent, PathError> {
        let i = self.store_index(index, ComponentType::Cubic)?;
        Ok(self.cubics[i])
    }

    pub fn update_linear_component_at(
        &mut self,
        index: usize,
        linear: LinearPathComponent,
    ) -> Result<(), PathError> {
        let i = self.store_index(index, ComponentType::Linear)?;
        self.linears[i] = linear;
        Ok(())
    }

    pub fn update_quadratic_component_at(
        &mut self,
        index: usize,
        quad: QuadraticPathComponent,
    ) -> Result<(), PathError> {
        let i = self.store_index(index, ComponentType::Quadratic)?;
        self.quads[i] = quad;
        Ok(())
    }

    pub fn update_cubic_component_at(
        &mut self,
        index: usize,
        cubic: CubicPathComponent,
    ) -> Result<(), PathError> {
        let i = self.store_index(index, ComponentType::Cubic)?;
        self.cubics[i] = cubic;
        Ok(())
    }

    /// Component index range covered by contour `segment`
    fn segment_range(&self, segment: usize) -> Option<std::ops::Range<usize>> {
        let start = *self.segment_indices.get(segment)?;
        let end = self
            .segment_indices
            .get(segment + 1)
            .copied()
            .unwrap_or(self.components.len());
        Some(start..end)
    }

    /// Flattens one contour. An out-of-range `segment` yields no points.
    pub fn create_polyline(
        &self,
        segment: usize,
        approximation: &SmoothingApproximation,
    ) -> Vec<Point> {
        let mut points = Vec::new();
        if let Some(range) = self.segment_range(segment) {
            for pair in &self.components[range] {
                append_deduplicated(
                    &mut points,
                    self.resolve(*pair).create_polyline(approximation),
                );
            }
        }
        points
    }

    /// Flattens every contour into one polyline, recording where each
    /// contour after the first begins.
    pub fn polyline(&self, approximation: &SmoothingApproximation) -> Polyline {
        let mut polyline = Polyline::default();
        for segment in 0..self.segment_count() {
            let points = self.create_polyline(segment, approximation);
            if points.is_empty() {
                continue;
            }
            if !polyline.points.is_empty() {
                polyline.breaks.push(polyline.points.len());
            }
            polyline.points.extend(points);
        }
        polyline
    }

    /// Axis-aligned bounds of every component, curve extrema included.
    /// `None` when the path has no components.
    pub fn bounding_box(&self) -> Option<Rect> {
        let extrema = self
            .linears
            .iter()
            .flat_map(|linear| linear.extrema())
            .chain(self.quads.iter().flat_map(|quad| quad.extrema()))
            .chain(self.cubics.iter().flat_map(|cubic| cubic.extrema()));

        let (min, max) = extrema.fold(None, |acc: Option<(Point, Point)>, p| match acc {
            None => Some((p, p)),
            Some((min, max)) => Some((min.min(p), max.max(p))),
        })?;
        Some(Rect::from_ltrb(min.x, min.y, max.x, max.y))
    }
}

/// Components share end points with their predecessor; keep only one copy.
fn append_deduplicated(points: &mut Vec<Point>, extra: Vec<Point>) {
    for point in extra {
        if points.last() != Some(&point) {
            points.push(point);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_contours_skip_invalid_breaks() {
        let polyline = Polyline {
            points: (0..10).map(|i| p(i as f32, 0.0)).collect(),
            breaks: vec![5, 2, 100],
        };

        let contours: Vec<&[Point]> = polyline.contours().collect();
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0], &polyline.points[..5]);
    }

    #[test]
    fn test_contours_split_at_breaks() {
        let polyline = Polyline {
            points: (0..6).map(|i| p(i as f32, 0.0)).collect(),
            breaks: vec![2, 4],
        };

        let lengths: Vec<usize> = polyline.contours().map(<[Point]>::len).collect();
        assert_eq!(lengths, vec![2, 2, 2]);
    }

    #[test]
    fn test_empty_path() {
        let path = Path::new();
        assert_eq!(path.segment_count(), 1);
        assert_eq!(path.component_count(), 0);
        assert_eq!(path.bounding_box(), None);
        assert!(path
            .create_polyline(0, &SmoothingApproximation::default())
            .is_empty());
        assert!(path.polyline(&SmoothingApproximation::default()).is_empty());
    }

    #[test]
    fn test_leading_segment_is_not_added() {
        let mut path = Path::new();
        path.add_path_segment().add_path_segment();
        assert_eq!(path.segment_count(), 1);
    }

    #[test]
    fn test_single_contour() {
        let mut path = Path::new();
        path.add_linear_component(p(0.0, 0.0), p(10.0, 0.0))
            .add_linear_component(p(10.0, 0.0), p(10.0, 10.0));

        assert_eq!(path.segment_count(), 1);
        assert_eq!(path.bounding_box(), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(
            path.create_polyline(0, &SmoothingApproximation::default()),
            vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0)]
        );
    }

    #[test]
    fn test_two_contours() {
        let mut path = Path::new();
        path.add_linear_component(p(0.0, 0.0), p(10.0, 0.0))
            .add_path_segment()
            .add_linear_component(p(20.0, 20.0), p(30.0, 20.0));

        let approximation = SmoothingApproximation::default();
        assert_eq!(path.segment_count(), 2);
        assert_eq!(
            path.create_polyline(0, &approximation),
            vec![p(0.0, 0.0), p(10.0, 0.0)]
        );
        assert_eq!(
            path.create_polyline(1, &approximation),
            vec![p(20.0, 20.0), p(30.0, 20.0)]
        );
        assert!(path.create_polyline(2, &approximation).is_empty());

        let polyline = path.polyline(&approximation);
        assert_eq!(polyline.points.len(), 4);
        assert_eq!(polyline.breaks, vec![2]);
        let contours: Vec<_> = polyline.contours().collect();
        assert_eq!(contours.len(), 2);
        assert_eq!(contours[1], &[p(20.0, 20.0), p(30.0, 20.0)]);
    }

    #[test]
    fn test_bounding_box_uses_curve_extrema() {
        let mut path = Path::new();
        path.add_quadratic_component(p(0.0, 0.0), p(50.0, -100.0), p(100.0, 0.0));
        let bounds = path.bounding_box().unwrap();
        assert!((bounds.top() + 50.0).abs() < 1e-4);
        assert_eq!(bounds.bottom(), 0.0);
        assert_eq!(bounds.size.width, 100.0);
    }

    #[test]
    fn test_typed_access() {
        let mut path = Path::new();
        path.add_linear_component(p(0.0, 0.0), p(1.0, 1.0))
            .add_cubic_component(p(1.0, 1.0), p(2.0, 2.0), p(3.0, 2.0), p(4.0, 1.0));

        assert!(path.linear_component_at(0).is_ok());
        assert_eq!(
            path.quadratic_component_at(1),
            Err(PathError::TypeMismatch {
                index: 1,
                expected: ComponentType::Quadratic,
                found: ComponentType::Cubic,
            })
        );
        assert_eq!(
            path.linear_component_at(5),
            Err(PathError::IndexOutOfRange { index: 5, count: 2 })
        );

        let before = path.clone();
        let result = path.update_linear_component_at(1, LinearPathComponent::default());
        assert!(matches!(result, Err(PathError::TypeMismatch { .. })));
        assert_eq!(path, before);

        let replacement = LinearPathComponent::new(p(5.0, 5.0), p(6.0, 6.0));
        path.update_linear_component_at(0, replacement).unwrap();
        assert_eq!(path.linear_component_at(0), Ok(replacement));
    }

    #[test]
    fn test_enumerate_components_in_order() {
        #[derive(Default)]
        struct Recorder(Vec<(usize, ComponentType)>);

        impl PathComponentVisitor for Recorder {
            fn visit_linear(&mut self, index: usize, _: &LinearPathComponent) {
                self.0.push((index, ComponentType::Linear));
            }

            fn visit_cubic(&mut self, index: usize, _: &CubicPathComponent) {
                self.0.push((index, ComponentType::Cubic));
            }
        }

        let mut path = Path::new();
        path.add_cubic_component(p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0))
            .add_quadratic_component(p(0.0, 1.0), p(0.0, 2.0), p(1.0, 2.0))
            .add_linear_component(p(1.0, 2.0), p(0.0, 0.0));

        let mut recorder = Recorder::default();
        path.enumerate_components(&mut recorder);
        // The quadratic has no visitor method and is skipped.
        assert_eq!(
            recorder.0,
            vec![(0, ComponentType::Cubic), (2, ComponentType::Linear)]
        );

        let kinds: Vec<_> = path.components().map(|c| c.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ComponentType::Cubic,
                ComponentType::Quadratic,
                ComponentType::Linear
            ]
        );
    }
}
