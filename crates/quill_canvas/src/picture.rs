//! Pictures - immutable recordings of canvas operations
//!
//! Every operation captures the transformation and stencil depth that were in
//! effect when it was recorded. Replaying a picture turns each operation into
//! an [`Entity`] and renders it, in recording order.
//!
//! Clip restores are not drawing operations. They are kept beside the
//! operations, keyed by the position they were recorded at, and only show up
//! as entities on replay.

use std::sync::Arc;

use quill_gpu::{
    ClipContents, ClipRestoreContents, ContentContext, Contents, Entity, RenderPass, Result,
    SolidColorContents,
};
use quill_paint::{Color, Matrix, Path, Rect, Vector3};

use crate::paint::Paint;

/// A single recorded drawing operation
#[derive(Clone, Debug)]
pub enum PictureOperation {
    DrawPath {
        path: Path,
        paint: Paint,
        transformation: Matrix,
        stencil_depth: u32,
    },
    SaveLayer {
        paint: Paint,
        bounds: Option<Rect>,
        transformation: Matrix,
    },
    ClipPath {
        path: Path,
        transformation: Matrix,
        stencil_depth: u32,
    },
    DrawShadow {
        path: Path,
        color: Color,
        elevation: f32,
        transformation: Matrix,
        stencil_depth: u32,
    },
    DrawPicture {
        picture: Arc<Picture>,
        transformation: Matrix,
        stencil_depth: u32,
    },
}

/// Resets the stencil buffer to `stencil_depth` before the operation at
/// `position` is replayed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClipRestore {
    /// Number of operations recorded before the restore
    pub position: usize,
    pub stencil_depth: u32,
}

#[derive(Clone, Debug, Default)]
pub struct Picture {
    operations: Vec<PictureOperation>,
    /// Sorted by position
    clip_restores: Vec<ClipRestore>,
}

impl Picture {
    pub fn new(operations: Vec<PictureOperation>) -> Self {
        Self {
            operations,
            clip_restores: Vec::new(),
        }
    }

    /// Schedule stencil resets between operations. Positions past the end
    /// replay after the last operation.
    pub fn with_clip_restores(mut self, mut clip_restores: Vec<ClipRestore>) -> Self {
        clip_restores.sort_by_key(|restore| restore.position);
        self.clip_restores = clip_restores;
        self
    }

    /// Number of recorded drawing operations. Clip restores are not counted.

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn operations(&self) -> &[PictureOperation] {
        &self.operations
    }

    pub fn clip_restores(&self) -> &[ClipRestore] {
        &self.clip_restores
    }

    /// The entities this picture draws, in order.
    ///
    /// Nested pictures are flattened: their transformations are prefixed with
    /// the transformation at the point they were drawn, and their stencil
    /// depths are offset by the enclosing depth. A nested picture that ends
    /// with clips still applied is followed by a restore to the depth it was
    /// drawn at.
    pub fn entities(&self) -> Vec<Entity> {
        let mut entities = Vec::with_capacity(self.operations.len() + self.clip_restores.len());
        self.collect_entities(&Matrix::IDENTITY, 0, &mut entities);
        entities
    }

    /// Returns the stencil depth, relative to `depth_offset`, left in effect
    /// after the last operation.
    fn collect_entities(&self, base: &Matrix, depth_offset: u32, out: &mut Vec<Entity>) -> u32 {
        let mut restores = self.clip_restores.iter().peekable();
        let mut depth = 0;

        for (index, op) in self.operations.iter().enumerate() {
            while let Some(restore) = restores.next_if(|restore| restore.position <= index) {
                depth = restore.stencil_depth;
                out.push(clip_restore_entity(base, depth_offset.saturating_add(depth)));
            }

            match op {
                PictureOperation::DrawPath {
                    path,
                    paint,
                    transformation,
                    stencil_depth,
                } => out.push(
                    Entity::new()
                        .with_path(path.clone())
                        .with_transformation(*base * *transformation)
                        .with_stencil_depth(depth_offset.saturating_add(*stencil_depth))
                        .with_contents(paint.create_contents()),
                ),
                // Layers are composited offscreen by the backend, if at all.
                PictureOperation::SaveLayer { .. } => {}
                PictureOperation::ClipPath {
                    path,
                    transformation,
                    stencil_depth,
                } => {
                    depth = stencil_depth.saturating_add(1);
                    out.push(
                        Entity::new()
                            .with_path(path.clone())
                            .with_transformation(*base * *transformation)
                            .with_stencil_depth(depth_offset.saturating_add(*stencil_depth))
                            .with_contents(ClipContents),
                    );
                }
                PictureOperation::DrawShadow {
                    path,
                    color,
                    elevation,
                    transformation,
                    stencil_depth,
                } => {
                    let offset = Matrix::make_translation(Vector3::new(0.0, *elevation, 0.0));
                    out.push(
                        Entity::new()
                            .with_path(path.clone())
                            .with_transformation(*base * *transformation * offset)
                            .with_stencil_depth(depth_offset.saturating_add(*stencil_depth))
                            .with_contents(SolidColorContents::new(*color)),
                    );
                }
                PictureOperation::DrawPicture {
                    picture,
                    transformation,
                    stencil_depth,
                } => {
                    let offset = depth_offset.saturating_add(*stencil_depth);
                    let inner_depth =
                        picture.collect_entities(&(*base * *transformation), offset, out);
                    // Clips left open by the nested picture end with it.
                    if inner_depth > 0 {
                        out.push(clip_restore_entity(base, offset));
                    }
                }
            }
        }

        for restore in restores {
            depth = restore.stencil_depth;
            out.push(clip_restore_entity(base, depth_offset.saturating_add(depth)));
        }
        depth
    }

    /// Render every entity into `pass`.
    ///
    /// Stops at the first failure; commands emitted before it stay in the
    /// pass.
    pub fn render(&self, renderer: &ContentContext, pass: &mut dyn RenderPass) -> Result<()> {
        let entities = self.entities();
        tracing::debug!(
            "Replaying picture: {} operations, {} clip restores, {} entities",
            self.operations.len(),
            self.clip_restores.len(),
            entities.len()
        );

        for (index, entity) in entities.iter().enumerate() {
            if let Err(err) = entity.render(renderer, pass) {
                tracing::warn!(
                    "Picture replay failed at entity {} ({}): {}",
                    index,
                    entity.contents().map_or("none", Contents::name),
                    err
                );
                return Err(err);
            }
        }
        Ok(())
    }
}

fn clip_restore_entity(base: &Matrix, stencil_depth: u32) -> Entity {
    Entity::new()
        .with_transformation(*base)
        .with_stencil_depth(stencil_depth)
        .with_contents(ClipRestoreContents)
}
