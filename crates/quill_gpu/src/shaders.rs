//! Shader data layouts
//!
//! Per-vertex and uniform structures for each pipeline. All structures use
//! `#[repr(C)]` and implement `bytemuck::Pod` so they can be copied straight
//! into the transients buffer. Field order and padding must match the
//! backend's shader interface.

use quill_paint::{Color, Matrix, Point};

/// Uniform slot names shared with the backend's bind group layouts
pub mod slots {
    pub const FRAME_INFO: &str = "FrameInfo";
    pub const GRADIENT_INFO: &str = "GradientInfo";
    pub const STROKE_INFO: &str = "StrokeInfo";
    pub const TEXTURE_SAMPLER: &str = "texture_sampler";
}

pub fn mvp_to_array(mvp: &Matrix) -> [[f32; 4]; 4] {
    mvp.cols
}

// ─────────────────────────────────────────────────────────────────────────────
// Solid fill (also used by clip and clip restore)
// ─────────────────────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SolidFillVertex {
    pub position: [f32; 2],
}

impl From<Point> for SolidFillVertex {
    fn from(point: Point) -> Self {
        Self {
            position: point.to_array(),
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SolidFillFrameInfo {
    pub mvp: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl SolidFillFrameInfo {
    pub fn new(mvp: &Matrix, color: Color) -> Self {
        Self {
            mvp: mvp_to_array(mvp),
            color: color.to_array(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Linear gradient
// ─────────────────────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GradientFrameInfo {
    pub mvp: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GradientInfo {
    pub start_point: [f32; 2],
    pub end_point: [f32; 2],
    pub start_color: [f32; 4],
    pub end_color: [f32; 4],
}

// ─────────────────────────────────────────────────────────────────────────────
// Texture fill
// ─────────────────────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TextureFillVertex {
    pub position: [f32; 2],
    /// Normalized (0..1) texture coordinates
    pub texture_coords: [f32; 2],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TextureFrameInfo {
    pub mvp: [[f32; 4]; 4],
    pub alpha: f32,
    pub _padding: [f32; 3],
}

// ─────────────────────────────────────────────────────────────────────────────
// Solid stroke
// ─────────────────────────────────────────────────────────────────────────────

/// Stroke vertices are expanded in the vertex shader:
/// `position + normal * size / 2`. A zero `pen_down` makes the vertex fully
/// transparent, which hides the bridge between disjoint contours.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StrokeVertex {
    pub position: [f32; 2],
    pub normal: [f32; 2],
    pub pen_down: f32,
}

impl StrokeVertex {
    pub fn new(position: Point, normal: Point, pen_down: f32) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            pen_down,
        }
    }

    pub fn normal(&self) -> Point {
        Point::new(self.normal[0], self.normal[1])
    }

    pub fn position(&self) -> Point {
        Point::new(self.position[0], self.position[1])
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StrokeFrameInfo {
    pub mvp: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StrokeInfo {
    pub color: [f32; 4],
    pub size: f32,
    pub _padding: [f32; 3],
}
