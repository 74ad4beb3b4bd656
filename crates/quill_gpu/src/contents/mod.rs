//! Contents - the paint half of an entity
//!
//! Each variant turns an entity's path into at most one draw command:
//!
//! ```text
//!   Entity { path, transformation, stencil_depth }
//!          │
//!          ▼
//!   Path::polyline ──▶ Tessellator / stroke builder ──▶ vertices
//!          │
//!          ▼
//!   Command { pipeline, vertices, uniforms } ──▶ RenderPass::add_command
//! ```
//!
//! A variant that has nothing visible to draw (transparent color, empty
//! geometry, zero-sized texture) succeeds without emitting a command.

mod clip;
mod linear_gradient;
mod solid_color;
mod solid_stroke;
mod texture;

pub use clip::{ClipContents, ClipRestoreContents};
pub use linear_gradient::LinearGradientContents;
pub use solid_color::SolidColorContents;
pub use solid_stroke::{
    bevel_join, create_solid_stroke_vertices, no_cap, Cap, CapProc, Join, JoinProc,
    SolidStrokeContents,
};
pub use texture::TextureContents;

use quill_paint::Rect;

use crate::command::Command;
use crate::entity::Entity;
use crate::error::{RenderError, Result};
use crate::pipeline::ContentContext;
use crate::render_pass::RenderPass;

/// The shared contract of every contents variant
pub trait RenderContents {
    /// Append this content's draw command for `entity` to `pass`.
    fn render(
        &self,
        renderer: &ContentContext,
        entity: &Entity,
        pass: &mut dyn RenderPass,
    ) -> Result<()>;

    /// Area the command may touch, in render target space
    fn coverage(&self, entity: &Entity) -> Option<Rect> {
        entity
            .path()
            .bounding_box()
            .map(|bounds| bounds.transform_bounds(entity.transformation()))
    }
}

/// The closed set of contents
#[derive(Clone, Debug)]
pub enum Contents {
    SolidColor(SolidColorContents),
    LinearGradient(LinearGradientContents),
    Texture(TextureContents),
    SolidStroke(SolidStrokeContents),
    Clip(ClipContents),
    ClipRestore(ClipRestoreContents),
}

impl Contents {
    fn as_render_contents(&self) -> &dyn RenderContents {
        match self {
            Contents::SolidColor(contents) => contents,
            Contents::LinearGradient(contents) => contents,
            Contents::Texture(contents) => contents,
            Contents::SolidStroke(contents) => contents,
            Contents::Clip(contents) => contents,
            Contents::ClipRestore(contents) => contents,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Contents::SolidColor(_) => "SolidColor",
            Contents::LinearGradient(_) => "LinearGradient",
            Contents::Texture(_) => "Texture",
            Contents::SolidStroke(_) => "SolidStroke",
            Contents::Clip(_) => "Clip",
            Contents::ClipRestore(_) => "ClipRestore",
        }
    }
}

impl RenderContents for Contents {
    fn render(
        &self,
        renderer: &ContentContext,
        entity: &Entity,
        pass: &mut dyn RenderPass,
    ) -> Result<()> {
        self.as_render_contents().render(renderer, entity, pass)
    }

    fn coverage(&self, entity: &Entity) -> Option<Rect> {
        self.as_render_contents().coverage(entity)
    }
}

macro_rules! impl_from_contents {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Contents {
                fn from(contents: $ty) -> Self {
                    Contents::$variant(contents)
                }
            }
        )*
    };
}

impl_from_contents! {
    SolidColor => SolidColorContents,
    LinearGradient => LinearGradientContents,
    Texture => TextureContents,
    SolidStroke => SolidStrokeContents,
    Clip => ClipContents,
    ClipRestore => ClipRestoreContents,
}

/// Hand a finished command to the pass.
fn submit(pass: &mut dyn RenderPass, command: Command) -> Result<()> {
    let label = command.label;
    if pass.add_command(command) {
        Ok(())
    } else {
        tracing::warn!("Render pass rejected {} command", label);
        Err(RenderError::CommandRejected(label))
    }
}
