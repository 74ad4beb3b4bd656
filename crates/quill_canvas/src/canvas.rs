//! Canvas - the recording API
//!
//! A canvas keeps a stack of frames, each holding the current transformation
//! and clip depth. Drawing calls snapshot the top frame into a
//! [`PictureOperation`]; nothing is rendered until the finished [`Picture`] is
//! replayed.

use std::sync::Arc;

use quill_paint::{Color, Matrix, Path, Radians, Rect, Vector3};

use crate::paint::Paint;
use crate::picture::{ClipRestore, Picture, PictureOperation};

#[derive(Clone, Copy, Debug, PartialEq)]
struct CanvasFrame {
    transformation: Matrix,
    stencil_depth: u32,
}

impl Default for CanvasFrame {
    fn default() -> Self {
        Self {
            transformation: Matrix::IDENTITY,
            stencil_depth: 0,
        }
    }
}

/// Records drawing operations for a [`Picture`]
#[derive(Debug, Default)]
pub struct Canvas {
    /// Top of the stack
    current: CanvasFrame,
    /// Frames below the top, bottom first
    saved: Vec<CanvasFrame>,
    ops: Vec<PictureOperation>,
    clip_restores: Vec<ClipRestore>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    // === State stack ===

    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Pop the top frame. The base frame is never removed; restoring it
    /// returns `false`.
    pub fn restore(&mut self) -> bool {
        let Some(parent) = self.saved.pop() else {
            tracing::debug!("Canvas::restore called with no saved state");
            return false;
        };

        if self.current.stencil_depth > parent.stencil_depth {
            self.clip_restores.push(ClipRestore {
                position: self.ops.len(),
                stencil_depth: parent.stencil_depth,
            });
        }
        self.current = parent;
        true
    }

    /// Number of frames on the stack, starting at 1
    pub fn save_count(&self) -> usize {
        self.saved.len() + 1
    }

    pub fn current_transformation(&self) -> &Matrix {
        &self.current.transformation
    }

    pub fn stencil_depth(&self) -> u32 {
        self.current.stencil_depth
    }

    // === Transforms ===

    /// Prepend `transformation` to everything drawn from now on
    pub fn concat(&mut self, transformation: &Matrix) {
        self.current.transformation = self.current.transformation * *transformation;
    }

    pub fn translate(&mut self, offset: Vector3) {
        self.concat(&Matrix::make_translation(offset));
    }

    pub fn scale(&mut self, scale: Vector3) {
        self.concat(&Matrix::make_scale(scale));
    }

    pub fn rotate(&mut self, radians: Radians) {
        self.concat(&Matrix::make_rotation_z(radians));
    }

    // === Drawing ===

    pub fn draw_path(&mut self, path: Path, paint: Paint) {
        self.ops.push(PictureOperation::DrawPath {
            path,
            paint,
            transformation: self.current.transformation,
            stencil_depth: self.current.stencil_depth,
        });
    }

    /// Save, then record a layer with `paint`
    pub fn save_layer(&mut self, paint: Paint, bounds: Option<Rect>) {
        self.save();
        self.ops.push(PictureOperation::SaveLayer {
            paint,
            bounds,
            transformation: self.current.transformation,
        });
    }

    /// Restrict drawing to `path` until the enclosing frame is restored
    pub fn clip_path(&mut self, path: Path) {
        self.ops.push(PictureOperation::ClipPath {
            path,
            transformation: self.current.transformation,
            stencil_depth: self.current.stencil_depth,
        });
        self.current.stencil_depth = self.current.stencil_depth.saturating_add(1);
    }

    pub fn draw_shadow(&mut self, path: Path, color: Color, elevation: f32) {
        self.ops.push(PictureOperation::DrawShadow {
            path,
            color,
            elevation,
            transformation: self.current.transformation,
            stencil_depth: self.current.stencil_depth,
        });
    }

    pub fn draw_picture(&mut self, picture: Arc<Picture>) {
        self.ops.push(PictureOperation::DrawPicture {
            picture,
            transformation: self.current.transformation,
            stencil_depth: self.current.stencil_depth,
        });
    }

    // === Finishing ===

    /// Hand the recorded operations to a new picture. The canvas keeps its
    /// state stack and starts recording from empty.
    pub fn end_recording_as_picture(&mut self) -> Picture {
        let ops = std::mem::take(&mut self.ops);
        let clip_restores = std::mem::take(&mut self.clip_restores);
        tracing::debug!(
            "Recorded picture with {} operations, {} clip restores",
            ops.len(),
            clip_restores.len()
        );
        Picture::new(ops).with_clip_restores(clip_restores)
    }
}
