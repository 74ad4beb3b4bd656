//! Entities pair geometry with paint
//!
//! An [`Entity`] is the unit the renderer draws: a path, the transform it is
//! drawn under, the stencil depth of the clip it sits in, and the
//! [`Contents`] that decide how it is painted.

use quill_paint::{Matrix, Path, Rect};

use crate::contents::{Contents, RenderContents};
use crate::error::Result;
use crate::pipeline::ContentContext;
use crate::render_pass::RenderPass;

#[derive(Clone, Debug, Default)]
pub struct Entity {
    transformation: Matrix,
    path: Path,
    stencil_depth: u32,
    contents: Option<Contents>,
}

impl Entity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: Path) -> Self {
        self.path = path;
        self
    }

    pub fn with_transformation(mut self, transformation: Matrix) -> Self {
        self.transformation = transformation;
        self
    }

    pub fn with_stencil_depth(mut self, depth: u32) -> Self {
        self.stencil_depth = depth;
        self
    }

    pub fn with_contents(mut self, contents: impl Into<Contents>) -> Self {
        self.contents = Some(contents.into());
        self
    }

    pub fn transformation(&self) -> &Matrix {
        &self.transformation
    }

    pub fn set_transformation(&mut self, transformation: Matrix) {
        self.transformation = transformation;
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn set_path(&mut self, path: Path) {
        self.path = path;
    }

    pub fn stencil_depth(&self) -> u32 {
        self.stencil_depth
    }

    pub fn set_stencil_depth(&mut self, depth: u32) {
        self.stencil_depth = depth;
    }

    /// Raise the stencil depth by `increment`, saturating
    pub fn increment_stencil_depth(&mut self, increment: u32) {
        self.stencil_depth = self.stencil_depth.saturating_add(increment);
    }

    pub fn contents(&self) -> Option<&Contents> {
        self.contents.as_ref()
    }

    pub fn set_contents(&mut self, contents: impl Into<Contents>) {
        self.contents = Some(contents.into());
    }

    /// Area affected by drawing this entity, in render target space
    pub fn coverage(&self) -> Option<Rect> {
        self.contents.as_ref()?.coverage(self)
    }

    /// Render the entity's contents. Entities without contents draw nothing.
    pub fn render(&self, renderer: &ContentContext, pass: &mut dyn RenderPass) -> Result<()> {
        match &self.contents {
            Some(contents) => contents.render(renderer, self, pass),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contents::test_support::{pass, renderer, square_path};
    use crate::contents::SolidColorContents;
    use quill_paint::{Color, Vector3};

    #[test]
    fn test_entity_without_contents_draws_nothing() {
        let renderer = renderer();
        let mut pass = pass();
        let entity = Entity::new().with_path(square_path());

        entity.render(&renderer, &mut pass).unwrap();
        assert!(pass.commands().is_empty());
        assert_eq!(entity.coverage(), None);
    }

    #[test]
    fn test_coverage_follows_transformation() {
        let entity = Entity::new()
            .with_path(square_path())
            .with_transformation(Matrix::make_translation(Vector3::new(10.0, 20.0, 0.0)))
            .with_contents(SolidColorContents::new(Color::RED));

        assert_eq!(entity.coverage(), Some(Rect::new(20.0, 30.0, 100.0, 100.0)));
    }

    #[test]
    fn test_increment_stencil_depth_saturates() {
        let mut entity = Entity::new().with_stencil_depth(u32::MAX - 1);
        entity.increment_stencil_depth(5);
        assert_eq!(entity.stencil_depth(), u32::MAX);
    }
}
