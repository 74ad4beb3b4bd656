use quill_paint::{Color, Matrix, Point};
use smallvec::{smallvec, SmallVec};

use super::solid_color::create_solid_fill_vertices;
use super::{submit, RenderContents};
use crate::command::{Command, PrimitiveType, ShaderStage};
use crate::entity::Entity;
use crate::error::Result;
use crate::pipeline::{ContentContext, ContentContextOptions};
use crate::render_pass::RenderPass;
use crate::shaders::{mvp_to_array, slots, GradientFrameInfo, GradientInfo};

/// Fills a path with a two-stop linear gradient.
///
/// Any number of colors can be stored, but the fill only interpolates
/// between the first two.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradientContents {
    start_point: Point,
    end_point: Point,
    colors: SmallVec<[Color; 2]>,
}

impl Default for LinearGradientContents {
    fn default() -> Self {
        Self {
            start_point: Point::ZERO,
            end_point: Point::ZERO,
            colors: smallvec![Color::BLACK, Color::BLACK],
        }
    }
}

impl LinearGradientContents {
    pub fn new(start_point: Point, end_point: Point, colors: &[Color]) -> Self {
        let mut contents = Self::default();
        contents.set_end_points(start_point, end_point);
        contents.set_colors(colors);
        contents
    }

    pub fn set_end_points(&mut self, start_point: Point, end_point: Point) {
        self.start_point = start_point;
        self.end_point = end_point;
    }

    /// Store the gradient colors, padding to at least two entries
    pub fn set_colors(&mut self, colors: &[Color]) {
        self.colors = match colors {
            [] => smallvec![Color::BLACK, Color::BLACK],
            [only] => smallvec![*only, *only],
            many => SmallVec::from_slice(many),
        };
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn start_point(&self) -> Point {
        self.start_point
    }

    pub fn end_point(&self) -> Point {
        self.end_point
    }
}

impl RenderContents for LinearGradientContents {
    fn render(
        &self,
        renderer: &ContentContext,
        entity: &Entity,
        pass: &mut dyn RenderPass,
    ) -> Result<()> {
        let vertices = create_solid_fill_vertices(renderer, entity.path())?;
        if !vertices.has_vertices() {
            tracing::trace!("Skipping gradient fill with no area");
            return Ok(());
        }

        let mut cmd = Command::new(
            "LinearGradientFill",
            renderer.gradient_fill_pipeline(ContentContextOptions::from_pass(pass))?,
        );
        cmd.stencil_reference = entity.stencil_depth();
        cmd.primitive_type = PrimitiveType::Triangle;

        let mvp = Matrix::make_orthographic(pass.render_target_size()) * *entity.transformation();
        let frame_info = GradientFrameInfo {
            mvp: mvp_to_array(&mvp),
        };
        let gradient_info = GradientInfo {
            start_point: self.start_point.to_array(),
            end_point: self.end_point.to_array(),
            start_color: self.colors[0].to_array(),
            end_color: self.colors[1].to_array(),
        };

        let host_buffer = pass.transients_buffer();
        cmd.bind_vertices(vertices.create_vertex_buffer(host_buffer));
        cmd.bind_uniform(
            ShaderStage::Vertex,
            slots::FRAME_INFO,
            host_buffer.emplace_uniform(&frame_info),
        );
        cmd.bind_uniform(
            ShaderStage::Fragment,
            slots::GRADIENT_INFO,
            host_buffer.emplace_uniform(&gradient_info),
        );

        submit(pass, cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contents::test_support::{pass, renderer, square_path};
    use crate::pipeline::PipelineKind;

    #[test]
    fn test_set_colors_pads_to_two() {
        let mut gradient = LinearGradientContents::default();

        gradient.set_colors(&[]);
        assert_eq!(gradient.colors(), &[Color::BLACK, Color::BLACK]);

        gradient.set_colors(&[Color::RED]);
        assert_eq!(gradient.colors(), &[Color::RED, Color::RED]);

        gradient.set_colors(&[Color::RED, Color::GREEN, Color::BLUE]);
        assert_eq!(gradient.colors().len(), 3);
    }

    #[test]
    fn test_gradient_uses_first_two_colors() {
        let renderer = renderer();
        let mut pass = pass();
        let gradient = LinearGradientContents::new(
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            &[Color::RED, Color::BLUE, Color::GREEN],
        );

        gradient
            .render(&renderer, &Entity::new().with_path(square_path()), &mut pass)
            .unwrap();

        let [cmd] = pass.commands() else {
            panic!("expected exactly one command");
        };
        assert_eq!(cmd.label, "LinearGradientFill");
        assert_eq!(cmd.pipeline.kind(), PipelineKind::GradientFill);
        assert!(cmd.uniform(slots::FRAME_INFO).is_some());

        let binding = cmd.uniform(slots::GRADIENT_INFO).unwrap();
        assert_eq!(binding.stage, ShaderStage::Fragment);
        let info: GradientInfo =
            bytemuck::pod_read_unaligned(pass.transients().bytes(binding.view).unwrap());
        assert_eq!(info.start_color, Color::RED.to_array());
        assert_eq!(info.end_color, Color::BLUE.to_array());
        assert_eq!(info.end_point, [100.0, 0.0]);
    }

    #[test]
    fn test_empty_path_emits_nothing() {
        let renderer = renderer();
        let mut pass = pass();

        LinearGradientContents::default()
            .render(&renderer, &Entity::new(), &mut pass)
            .unwrap();
        assert!(pass.commands().is_empty());
    }
}
