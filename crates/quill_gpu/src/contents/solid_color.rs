use quill_paint::{Color, Matrix, Path};

use super::{submit, RenderContents};
use crate::command::{Command, PrimitiveType, ShaderStage};
use crate::entity::Entity;
use crate::error::Result;
use crate::host_buffer::VertexBufferBuilder;
use crate::pipeline::{ContentContext, ContentContextOptions};
use crate::render_pass::RenderPass;
use crate::shaders::{slots, SolidFillFrameInfo, SolidFillVertex};

/// Fills a path with a single color
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SolidColorContents {
    color: Color,
}

impl SolidColorContents {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// Triangulate `path` for filling.
pub(crate) fn create_solid_fill_vertices(
    renderer: &ContentContext,
    path: &Path,
) -> Result<VertexBufferBuilder<SolidFillVertex>> {
    let mut vtx_builder = VertexBufferBuilder::new();
    renderer
        .tessellator(path.fill_type())
        .tessellate(&path.polyline(renderer.smoothing()), |point| {
            vtx_builder.append_vertex(point.into());
        })?;
    Ok(vtx_builder)
}

impl RenderContents for SolidColorContents {
    fn render(
        &self,
        renderer: &ContentContext,
        entity: &Entity,
        pass: &mut dyn RenderPass,
    ) -> Result<()> {
        if self.color.is_transparent() {
            tracing::trace!("Skipping transparent solid fill");
            return Ok(());
        }

        let vertices = create_solid_fill_vertices(renderer, entity.path())?;
        if !vertices.has_vertices() {
            tracing::trace!("Skipping solid fill with no area");
            return Ok(());
        }

        let mut cmd = Command::new(
            "SolidFill",
            renderer.solid_fill_pipeline(ContentContextOptions::from_pass(pass))?,
        );
        cmd.stencil_reference = entity.stencil_depth();
        cmd.primitive_type = PrimitiveType::Triangle;

        let mvp = Matrix::make_orthographic(pass.render_target_size()) * *entity.transformation();
        let frame_info = SolidFillFrameInfo::new(&mvp, self.color);

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contents::test_support::{pass, renderer, square_path};
    use crate::error::RenderError;
    use crate::pipeline::PipelineKind;
    use crate::render_pass::RecordingPass;
    use quill_paint::{ISize, PathBuilder, Point};

    #[test]
    fn test_transparent_color_emits_nothing() {
        let renderer = renderer();
        let mut pass = pass();
        let entity = Entity::new().with_path(square_path());

        SolidColorContents::new(Color::TRANSPARENT)
            .render(&renderer, &entity, &mut pass)
            .unwrap();
        assert!(pass.commands().is_empty());
    }

    #[test]
    fn test_fill_emits_one_triangle_command() {
        let renderer = renderer();
        let mut pass = pass();
        let entity = Entity::new().with_path(square_path()).with_stencil_depth(2);

        SolidColorContents::new(Color::RED)
            .render(&renderer, &entity, &mut pass)
            .unwrap();

        let [cmd] = pass.commands() else {
            panic!("expected exactly one command");
        };
        assert_eq!(cmd.label, "SolidFill");
        assert_eq!(cmd.pipeline.kind(), PipelineKind::SolidFill);
        assert_eq!(cmd.primitive_type, PrimitiveType::Triangle);
        assert_eq!(cmd.stencil_reference, 2);
        assert!(cmd.vertex_buffer.vertex_count >= 6);
        assert_eq!(cmd.vertex_buffer.vertex_count % 3, 0);

        let frame = cmd.uniform(slots::FRAME_INFO).unwrap();
        let bytes = pass.transients().bytes(frame.view).unwrap();
        let info: SolidFillFrameInfo = bytemuck::pod_read_unaligned(bytes);
        assert_eq!(info.color, Color::RED.to_array());
    }

    #[test]
    fn test_degenerate_path_emits_nothing() {
        let renderer = renderer();
        let mut pass = pass();
        let line = PathBuilder::new()
            .move_to(Point::new(0.0, 0.0))
            .line_to(Point::new(50.0, 50.0))
            .build();

        SolidColorContents::new(Color::BLUE)
            .render(&renderer, &Entity::new().with_path(line), &mut pass)
            .unwrap();
        assert!(pass.commands().is_empty());
    }

    #[test]
    fn test_rejected_command_is_an_error() {
        let renderer = renderer();
        let mut pass = RecordingPass::new(ISize::new(100, 100)).with_capacity_limit(0);
        let entity = Entity::new().with_path(square_path());

        let err = SolidColorContents::new(Color::RED)
            .render(&renderer, &entity, &mut pass)
            .unwrap_err();
        assert_eq!(err, RenderError::CommandRejected("SolidFill"));
    }
}
