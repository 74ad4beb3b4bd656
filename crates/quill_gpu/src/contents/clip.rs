use quill_paint::{Color, Matrix, Point, Rect};

use super::solid_color::create_solid_fill_vertices;
use super::{submit, RenderContents};
use crate::command::{Command, PrimitiveType, ShaderStage};
use crate::entity::Entity;
use crate::error::Result;
use crate::host_buffer::VertexBufferBuilder;
use crate::pipeline::{ContentContext, ContentContextOptions};
use crate::render_pass::RenderPass;
use crate::shaders::{slots, SolidFillFrameInfo, SolidFillVertex};

/// Increments the stencil buffer inside the entity's path.
///
/// Nothing is written to the color attachment. Draws that follow at the
/// next stencil depth only land where the clip was drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClipContents;

impl ClipContents {
    pub fn new() -> Self {
        Self
    }
}

impl RenderContents for ClipContents {
    fn render(
        &self,
        renderer: &ContentContext,
        entity: &Entity,
        pass: &mut dyn RenderPass,
    ) -> Result<()> {
        let vertices = create_solid_fill_vertices(renderer, entity.path())?;
        if !vertices.has_vertices() {
            // Nothing passes the stencil test at the next depth.
            tracing::trace!("Clip path has no area; everything is clipped");
            return Ok(());
        }

        let mut cmd = Command::new(
            "Clip",
            renderer.clip_pipeline(ContentContextOptions::from_pass(pass))?,
        );
        cmd.stencil_reference = entity.stencil_depth();
        cmd.primitive_type = PrimitiveType::Triangle;

        let mvp = Matrix::make_orthographic(pass.render_target_size()) * *entity.transformation();
        // Color writes are disabled by the pipeline.
        let frame_info = SolidFillFrameInfo::new(&mvp, Color::SKY_BLUE);

        let host_buffer = pass.transients_buffer();
        cmd.bind_vertices(vertices.create_vertex_buffer(host_buffer));
        cmd.bind_uniform(
            ShaderStage::Vertex,
            slots::FRAME_INFO,
            host_buffer.emplace_uniform(&frame_info),
        );

        submit(pass, cmd)
    }
}

/// Resets the stencil buffer over the whole render target to the entity's
/// stencil depth, undoing every clip pushed above it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClipRestoreContents;

impl ClipRestoreContents {
    pub fn new() -> Self {
        Self
    }
}

impl RenderContents for ClipRestoreContents {
    fn render(
        &self,
        renderer: &ContentContext,
        entity: &Entity,
        pass: &mut dyn RenderPass,
    ) -> Result<()> {
        let mut cmd = Command::new(
            "Clip Restore",
            renderer.clip_restore_pipeline(ContentContextOptions::from_pass(pass))?,
        );
        cmd.stencil_reference = entity.stencil_depth();
        cmd.primitive_type = PrimitiveType::Triangle;

        let size = pass.render_target_size().to_size();
        let (w, h) = (size.width, size.height);
        let mut vtx_builder = VertexBufferBuilder::<SolidFillVertex>::new();
        vtx_builder.add_vertices(
            [
                Point::new(0.0, 0.0),
                Point::new(w, 0.0),
                Point::new(w, h),
                Point::new(0.0, 0.0),
                Point::new(w, h),
                Point::new(0.0, h),
            ]
            .map(SolidFillVertex::from),
        );

        // Vertices are already in render target space.
        let mvp = Matrix::make_orthographic(pass.render_target_size());
        let frame_info = SolidFillFrameInfo::new(&mvp, Color::SKY_BLUE);

        let host_buffer = pass.transients_buffer();
        cmd.bind_vertices(vtx_builder.create_vertex_buffer(host_buffer));
        cmd.bind_uniform(
            ShaderStage::Vertex,
            slots::FRAME_INFO,
            host_buffer.emplace_uniform(&frame_info),
        );

        submit(pass, cmd)
    }

    /// Restoring touches the whole target, whose size is only known to the
    /// pass.
    fn coverage(&self, _entity: &Entity) -> Option<Rect> {
        None
    }
}
