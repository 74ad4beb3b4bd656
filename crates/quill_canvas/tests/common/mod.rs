//! Shared fixtures for canvas integration tests

#![allow(dead_code)]

use std::sync::Arc;

use quill_gpu::{
    ContentContext, ContentContextOptions, Pipeline, PipelineHandle, PipelineKind,
    PipelineLibrary, RenderConfig, Texture,
};
use quill_paint::ISize;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

#[derive(Debug)]
pub struct TestPipeline(PipelineKind);

impl Pipeline for TestPipeline {
    fn kind(&self) -> PipelineKind {
        self.0
    }

    fn label(&self) -> &str {
        "test"
    }
}

/// Serves a pipeline for every kind except `missing`
#[derive(Debug, Default)]
pub struct TestLibrary {
    pub missing: Option<PipelineKind>,
}

impl PipelineLibrary for TestLibrary {
    fn pipeline(
        &self,
        kind: PipelineKind,
        options: ContentContextOptions,
    ) -> Option<PipelineHandle> {
        assert!(options.sample_count >= 1);
        if self.missing == Some(kind) {
            return None;
        }
        Some(Arc::new(TestPipeline(kind)))
    }
}

pub fn renderer() -> ContentContext {
    ContentContext::new(Box::new(TestLibrary::default()), RenderConfig::default())
}

pub fn renderer_without(kind: PipelineKind) -> ContentContext {
    ContentContext::new(
        Box::new(TestLibrary {
            missing: Some(kind),
        }),
        RenderConfig::default(),
    )
}

#[derive(Debug)]
pub struct TestTexture(pub ISize);

impl Texture for TestTexture {
    fn size(&self) -> ISize {
        self.0
    }
}

pub fn texture(width: i64, height: i64) -> Arc<dyn Texture> {
    Arc::new(TestTexture(ISize::new(width, height)))
}
