use std::sync::Arc;

use quill_paint::{IRect, Matrix, Point};

use super::{submit, RenderContents};
use crate::command::{Command, PrimitiveType, ShaderStage, Texture};
use crate::entity::Entity;
use crate::error::Result;
use crate::host_buffer::VertexBufferBuilder;
use crate::pipeline::{ContentContext, ContentContextOptions};
use crate::render_pass::RenderPass;
use crate::shaders::{mvp_to_array, slots, TextureFillVertex, TextureFrameInfo};

/// Fills a path with a region of a texture.
///
/// The source rect (in texels) is stretched over the path's bounding box.
#[derive(Clone, Debug)]
pub struct TextureContents {
    texture: Option<Arc<dyn Texture>>,
    source_rect: IRect,
    opacity: f32,
}

impl Default for TextureContents {
    fn default() -> Self {
        Self {
            texture: None,
            source_rect: IRect::default(),
            opacity: 1.0,
        }
    }
}

impl TextureContents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample the whole of `texture`
    pub fn with_texture(texture: Arc<dyn Texture>) -> Self {
        let source_rect = IRect::from_size(texture.size());
        Self {
            texture: Some(texture),
            source_rect,
            opacity: 1.0,
        }
    }

    pub fn set_texture(&mut self, texture: Arc<dyn Texture>) {
        self.texture = Some(texture);
    }

    pub fn texture(&self) -> Option<&Arc<dyn Texture>> {
        self.texture.as_ref()
    }

    pub fn set_source_rect(&mut self, source_rect: IRect) {
        self.source_rect = source_rect;
    }

    pub fn source_rect(&self) -> IRect {
        self.source_rect
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

impl RenderContents for TextureContents {
    fn render(
        &self,
        renderer: &ContentContext,
        entity: &Entity,
        pass: &mut dyn RenderPass,
    ) -> Result<()> {
        let Some(texture) = &self.texture else {
            tracing::trace!("Skipping texture fill without a texture");
            return Ok(());
        };

        let path = entity.path();
        let Some(coverage) = path.bounding_box().filter(|bounds| !bounds.size.is_empty()) else {
            tracing::trace!("Skipping texture fill with empty bounds");
            return Ok(());
        };

        let texture_size = texture.size();
        if texture_size.is_empty() || self.source_rect.is_empty() {
            tracing::trace!("Skipping texture fill with empty texture region");
            return Ok(());
        }
        let texture_size = texture_size.to_size();
        let source = self.source_rect.to_rect();

        let mut vtx_builder = VertexBufferBuilder::new();
        renderer
            .tessellator(path.fill_type())
            .tessellate(&path.polyline(renderer.smoothing()), |vtx| {
                let relative = (vtx - coverage.origin) / coverage.size;
                let texel = source.origin
                    + Point::new(
                        source.size.width * relative.x,
                        source.size.height * relative.y,
                    );
                vtx_builder.append_vertex(TextureFillVertex {
                    position: vtx.to_array(),
                    texture_coords: (texel / texture_size).to_array(),
                });
            })?;

        if !vtx_builder.has_vertices() {
            tracing::trace!("Skipping texture fill with no area");
            return Ok(());
        }

        let mut cmd = Command::new(
            "TextureFill",
            renderer.texture_pipeline(ContentContextOptions::from_pass(pass))?,
        );
        cmd.stencil_reference = entity.stencil_depth();
        cmd.primitive_type = PrimitiveType::Triangle;

        let mvp = Matrix::make_orthographic(pass.render_target_size()) * *entity.transformation();
        let frame_info = TextureFrameInfo {
            mvp: mvp_to_array(&mvp),
            alpha: self.opacity,
            _padding: [0.0; 3],
        };

        let host_buffer = pass.transients_buffer();
        cmd.bind_vertices(vtx_builder.create_vertex_buffer(host_buffer));
        cmd.bind_uniform(
            ShaderStage::Vertex,
            slots::FRAME_INFO,
            host_buffer.emplace_uniform(&frame_info),
        );
        cmd.bind_texture(
            ShaderStage::Fragment,
            slots::TEXTURE_SAMPLER,
            Arc::clone(texture),
        );

        submit(pass, cmd)
    }
}
