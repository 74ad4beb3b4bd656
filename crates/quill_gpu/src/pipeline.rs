//! Pipelines and the content context
//!
//! Pipeline objects are created by the backend; Quill only asks for them by
//! [`PipelineKind`] and hands the shared handle back inside each command.

use std::fmt;
use std::sync::Arc;

use quill_paint::{FillType, SmoothingApproximation, Tessellator};

use crate::config::RenderConfig;
use crate::error::{RenderError, Result};
use crate::render_pass::RenderPass;

/// The pipeline variants contents draw with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PipelineKind {
    SolidFill,
    GradientFill,
    Texture,
    SolidStroke,
    /// Writes the stencil buffer only
    Clip,
    /// Resets the stencil buffer to the reference value
    ClipRestore,
}

/// Render pass properties a pipeline must be compatible with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContentContextOptions {
    pub sample_count: u32,
}

impl Default for ContentContextOptions {
    fn default() -> Self {
        Self { sample_count: 1 }
    }
}

impl ContentContextOptions {
    pub fn from_pass(pass: &dyn RenderPass) -> Self {
        Self {
            sample_count: pass.sample_count(),
        }
    }
}

/// A backend pipeline object
pub trait Pipeline: fmt::Debug + Send + Sync {
    fn kind(&self) -> PipelineKind;

    fn label(&self) -> &str {
        ""
    }
}

pub type PipelineHandle = Arc<dyn Pipeline>;

/// Source of pipelines, implemented by the backend
pub trait PipelineLibrary: fmt::Debug {
    fn pipeline(&self, kind: PipelineKind, options: ContentContextOptions)
        -> Option<PipelineHandle>;
}

/// Everything contents need from the renderer besides the pass itself.
///
/// Constructed once per renderer and passed by reference into every render
/// call.
#[derive(Debug)]
pub struct ContentContext {
    library: Box<dyn PipelineLibrary>,
    config: RenderConfig,
}

impl ContentContext {
    pub fn new(library: Box<dyn PipelineLibrary>, config: RenderConfig) -> Self {
        Self { library, config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn smoothing(&self) -> &SmoothingApproximation {
        &self.config.smoothing
    }

    /// A fill tessellator configured from this context
    pub fn tessellator(&self, fill_type: FillType) -> Tessellator {
        Tessellator::new(fill_type).with_tolerance(self.config.fill_tolerance)
    }

    pub fn pipeline(
        &self,
        kind: PipelineKind,
        options: ContentContextOptions,
    ) -> Result<PipelineHandle> {
        self.library.pipeline(kind, options).ok_or_else(|| {
            tracing::warn!("No pipeline for {:?} with {:?}", kind, options);
            RenderError::PipelineUnavailable(kind)
        })
    }

    pub fn solid_fill_pipeline(&self, options: ContentContextOptions) -> Result<PipelineHandle> {
        self.pipeline(PipelineKind::SolidFill, options)
    }

    pub fn gradient_fill_pipeline(
        &self,
        options: ContentContextOptions,
    ) -> Result<PipelineHandle> {
        self.pipeline(PipelineKind::GradientFill, options)
    }

    pub fn texture_pipeline(&self, options: ContentContextOptions) -> Result<PipelineHandle> {
        self.pipeline(PipelineKind::Texture, options)
    }

    pub fn solid_stroke_pipeline(&self, options: ContentContextOptions) -> Result<PipelineHandle> {
        self.pipeline(PipelineKind::SolidStroke, options)
    }

    pub fn clip_pipeline(&self, options: ContentContextOptions) -> Result<PipelineHandle> {
        self.pipeline(PipelineKind::Clip, options)
    }

    pub fn clip_restore_pipeline(&self, options: ContentContextOptions) -> Result<PipelineHandle> {
        self.pipeline(PipelineKind::ClipRestore, options)
    }
}
