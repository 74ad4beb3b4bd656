//! Quill GPU
//!
//! The render-pass boundary of the Quill vector renderer. An [`Entity`] pairs
//! a path with [`Contents`]; rendering it appends at most one [`Command`] to
//! a [`RenderPass`]. Vertex and uniform data are staged in the pass's
//! [`HostBuffer`]; encoding commands for a device API is left to the backend.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use quill_gpu::{
//!     ContentContext, ContentContextOptions, Entity, Pipeline, PipelineHandle, PipelineKind,
//!     PipelineLibrary, RecordingPass, RenderConfig, SolidColorContents,
//! };
//! use quill_paint::{Color, ISize, PathBuilder, Rect};
//!
//! #[derive(Debug)]
//! struct Stub(PipelineKind);
//!
//! impl Pipeline for Stub {
//!     fn kind(&self) -> PipelineKind {
//!         self.0
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct Library;
//!
//! impl PipelineLibrary for Library {
//!     fn pipeline(&self, kind: PipelineKind, _: ContentContextOptions) -> Option<PipelineHandle> {
//!         Some(Arc::new(Stub(kind)))
//!     }
//! }
//!
//! let renderer = ContentContext::new(Box::new(Library), RenderConfig::default());
//! let mut pass = RecordingPass::new(ISize::new(640, 480));
//!
//! let entity = Entity::new()
//!     .with_path(PathBuilder::new().add_rect(Rect::new(0.0, 0.0, 64.0, 64.0)).build())
//!     .with_contents(SolidColorContents::new(Color::RED));
//! entity.render(&renderer, &mut pass).unwrap();
//!
//! assert_eq!(pass.commands().len(), 1);
//! ```

pub mod command;
pub mod config;
pub mod contents;
pub mod entity;
pub mod error;
pub mod host_buffer;
pub mod pipeline;
pub mod render_pass;
pub mod shaders;

pub use command::{
    Command, PrimitiveType, ShaderStage, Texture, TextureBinding, UniformBinding,
};
pub use config::{ConfigError, RenderConfig};
pub use contents::{
    Cap, ClipContents, ClipRestoreContents, Contents, Join, LinearGradientContents,
    RenderContents, SolidColorContents, SolidStrokeContents, TextureContents,
};
pub use entity::Entity;
pub use error::{RenderError, Result};
pub use host_buffer::{BufferView, HostBuffer, VertexBuffer, VertexBufferBuilder};
pub use pipeline::{
    ContentContext, ContentContextOptions, Pipeline, PipelineHandle, PipelineKind,
    PipelineLibrary,
};
pub use render_pass::{RecordingPass, RenderPass};
