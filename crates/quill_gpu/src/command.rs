//! Draw commands handed to the render pass
//!
//! A [`Command`] is everything one draw call needs: pipeline, vertex stream,
//! bound uniforms and textures, stencil reference and topology. Quill only
//! produces commands; encoding them for a device API happens in the backend.

use std::fmt;
use std::sync::Arc;

use quill_paint::ISize;
use smallvec::SmallVec;

use crate::host_buffer::{BufferView, VertexBuffer};
use crate::pipeline::PipelineHandle;

/// Primitive topology (must match pipeline descriptors)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    #[default]
    Triangle,
    TriangleStrip,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

/// A GPU texture owned by the backend.
///
/// Textures are shared between every command that samples them, so contents
/// hold them as `Arc<dyn Texture>`.
pub trait Texture: fmt::Debug + Send + Sync {
    fn size(&self) -> ISize;

    fn label(&self) -> &str {
        ""
    }
}

/// A uniform block bound to a named shader slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniformBinding {
    pub stage: ShaderStage,
    pub slot: &'static str,
    pub view: BufferView,
}

#[derive(Clone, Debug)]
pub struct TextureBinding {
    pub stage: ShaderStage,
    pub slot: &'static str,
    pub texture: Arc<dyn Texture>,
}

/// One draw call
#[derive(Clone, Debug)]
pub struct Command {
    pub label: &'static str,
    pub pipeline: PipelineHandle,
    pub stencil_reference: u32,
    pub vertex_buffer: VertexBuffer,
    pub primitive_type: PrimitiveType,
    pub uniforms: SmallVec<[UniformBinding; 2]>,
    pub textures: SmallVec<[TextureBinding; 1]>,
}

impl Command {
    pub fn new(label: &'static str, pipeline: PipelineHandle) -> Self {
        Self {
            label,
            pipeline,
            stencil_reference: 0,
            vertex_buffer: VertexBuffer::default(),
            primitive_type: PrimitiveType::default(),
            uniforms: SmallVec::new(),
            textures: SmallVec::new(),
        }
    }

    pub fn bind_vertices(&mut self, vertex_buffer: VertexBuffer) -> &mut Self {
        self.vertex_buffer = vertex_buffer;
        self
    }

    pub fn bind_uniform(
        &mut self,
        stage: ShaderStage,
        slot: &'static str,
        view: BufferView,
    ) -> &mut Self {
        self.uniforms.push(UniformBinding { stage, slot, view });
        self
    }

    pub fn bind_texture(
        &mut self,
        stage: ShaderStage,
        slot: &'static str,
        texture: Arc<dyn Texture>,
    ) -> &mut Self {
        self.textures.push(TextureBinding {
            stage,
            slot,
            texture,
        });
        self
    }

    pub fn uniform(&self, slot: &str) -> Option<&UniformBinding> {
        self.uniforms.iter().find(|binding| binding.slot == slot)
    }
}
