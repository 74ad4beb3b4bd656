use quill_paint::{Color, Matrix, Point, Polyline, Rect};

use super::{submit, RenderContents};
use crate::command::{Command, PrimitiveType, ShaderStage};
use crate::entity::Entity;
use crate::error::Result;
use crate::host_buffer::VertexBufferBuilder;
use crate::pipeline::{ContentContext, ContentContextOptions};
use crate::render_pass::RenderPass;
use crate::shaders::{mvp_to_array, slots, StrokeFrameInfo, StrokeInfo, StrokeVertex};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Join {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Emits cap geometry at a contour end. `normal` points away from the
/// contour.
pub type CapProc = fn(&mut VertexBufferBuilder<StrokeVertex>, position: Point, normal: Point);

/// Emits join geometry where two segments meet at `position`.
pub type JoinProc = fn(
    &mut VertexBufferBuilder<StrokeVertex>,
    position: Point,
    start_normal: Point,
    end_normal: Point,
);

/// Cap hook that adds nothing; the stroke ends square at the last point.
pub fn no_cap(_: &mut VertexBufferBuilder<StrokeVertex>, _position: Point, _normal: Point) {}

/// Fills the wedge between two segment quads on the outside of the turn.
pub fn bevel_join(
    vtx_builder: &mut VertexBufferBuilder<StrokeVertex>,
    position: Point,
    start_normal: Point,
    end_normal: Point,
) {
    let dir = if start_normal.cross(end_normal) > 0.0 {
        -1.0
    } else {
        1.0
    };
    vtx_builder.add_vertices([
        StrokeVertex::new(position, Point::ZERO, 1.0),
        StrokeVertex::new(position, start_normal * dir, 1.0),
        StrokeVertex::new(position, end_normal * dir, 1.0),
    ]);
}

/// Build the triangle strip for stroking `polyline`.
///
/// Normals are unit length; the vertex shader scales them by half the stroke
/// width. Consecutive contours are bridged by two pen-up vertices so the
/// whole polyline stays a single strip.
pub fn create_solid_stroke_vertices(
    polyline: &Polyline,
    cap_proc: CapProc,
    join_proc: JoinProc,
) -> VertexBufferBuilder<StrokeVertex> {
    let mut vtx_builder = VertexBufferBuilder::new();
    let mut previous_end: Option<Point> = None;

    for contour in polyline.contours() {
        if contour.len() < 2 {
            continue;
        }
        let first = contour[0];
        let last = contour[contour.len() - 1];

        if let Some(end) = previous_end {
            vtx_builder.add_vertices([
                StrokeVertex::new(end, Point::ZERO, 0.0),
                StrokeVertex::new(first, Point::ZERO, 0.0),
            ]);
        }

        let mut direction = (contour[1] - first).normalize();
        cap_proc(&mut vtx_builder, first, -direction);

        let mut previous_normal: Option<Point> = None;
        for segment in contour.windows(2) {
            let (p0, p1) = (segment[0], segment[1]);
            direction = (p1 - p0).normalize();
            let normal = Point::new(-direction.y, direction.x);

            if let Some(start_normal) = previous_normal {
                join_proc(&mut vtx_builder, p0, start_normal, normal);
            }
            vtx_builder.add_vertices([
                StrokeVertex::new(p0, normal, 1.0),
                StrokeVertex::new(p0, -normal, 1.0),
                StrokeVertex::new(p1, normal, 1.0),
                StrokeVertex::new(p1, -normal, 1.0),
            ]);
            previous_normal = Some(normal);
        }

        cap_proc(&mut vtx_builder, last, direction);
        previous_end = Some(last);
    }

    vtx_builder
}

/// Strokes a path with a single color
#[derive(Clone, Debug)]
pub struct SolidStrokeContents {
    color: Color,
    stroke_size: f32,
    miter: f32,
    cap: Cap,
    join: Join,
    cap_proc: CapProc,
}

impl Default for SolidStrokeContents {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            stroke_size: 0.0,
            miter: 4.0,
            cap: Cap::default(),
            join: Join::default(),
            cap_proc: no_cap,
        }
    }
}

impl SolidStrokeContents {
    pub fn new(color: Color, stroke_size: f32) -> Self {
        Self {
            color,
            stroke_size,
            ..Self::default()
        }
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_stroke_size(&mut self, size: f32) {
        self.stroke_size = size;
    }

    pub fn stroke_size(&self) -> f32 {
        self.stroke_size
    }

    /// Negative limits are ignored
    pub fn set_stroke_miter(&mut self, miter: f32) {
        if miter >= 0.0 {
            self.miter = miter;
        }
    }

    pub fn stroke_miter(&self) -> f32 {
        self.miter
    }

    pub fn set_stroke_cap(&mut self, cap: Cap) {
        self.cap = cap;
    }

    pub fn stroke_cap(&self) -> Cap {
        self.cap
    }

    pub fn set_stroke_join(&mut self, join: Join) {
        self.join = join;
    }

    pub fn stroke_join(&self) -> Join {
        self.join
    }

    /// Replace the cap geometry hook
    pub fn set_cap_proc(&mut self, cap_proc: CapProc) {
        self.cap_proc = cap_proc;
    }
}

impl RenderContents for SolidStrokeContents {
    fn render(
        &self,
        renderer: &ContentContext,
        entity: &Entity,
        pass: &mut dyn RenderPass,
    ) -> Result<()> {
        if self.color.is_transparent() || self.stroke_size <= 0.0 {
            tracing::trace!("Skipping invisible stroke");
            return Ok(());
        }

        let polyline = entity.path().polyline(renderer.smoothing());
        let vertices = create_solid_stroke_vertices(&polyline, self.cap_proc, bevel_join);
        if !vertices.has_vertices() {
            tracing::trace!("Skipping stroke with no segments");
            return Ok(());
        }

        let mut cmd = Command::new(
            "SolidStroke",
            renderer.solid_stroke_pipeline(ContentContextOptions::from_pass(pass))?,
        );
        cmd.stencil_reference = entity.stencil_depth();
        cmd.primitive_type = PrimitiveType::TriangleStrip;

        let mvp = Matrix::make_orthographic(pass.render_target_size()) * *entity.transformation();
        let frame_info = StrokeFrameInfo {
            mvp: mvp_to_array(&mvp),
        };
        let stroke_info = StrokeInfo {
            color: self.color.to_array(),
            size: self.stroke_size,
            _padding: [0.0; 3],
        };

        let host_buffer = pass.transients_buffer();
        cmd.bind_vertices(vertices.create_vertex_buffer(host_buffer));
        cmd.bind_uniform(
            ShaderStage::Vertex,
            slots::FRAME_INFO,
            host_buffer.emplace_uniform(&frame_info),
        );
        cmd.bind_uniform(
            ShaderStage::Vertex,
            slots::STROKE_INFO,
            host_buffer.emplace_uniform(&stroke_info),
        );

        submit(pass, cmd)
    }

    fn coverage(&self, entity: &Entity) -> Option<Rect> {
        let bounds = entity.path().bounding_box()?;
        let half = self.stroke_size.max(0.0) * 0.5;
        let outset = Rect::from_ltrb(
            bounds.left() - half,
            bounds.top() - half,
            bounds.right() + half,
            bounds.bottom() + half,
        );
        Some(outset.transform_bounds(entity.transformation()))
    }
}
