//! Quill Canvas
//!
//! Immediate-style drawing API that records into a [`Picture`]. A picture is
//! replayed against a [`quill_gpu::ContentContext`] and a
//! [`quill_gpu::RenderPass`] to produce draw commands.
//!
//! # Example
//!
//! ```rust
//! use quill_canvas::{Canvas, Paint};
//! use quill_paint::{Color, PathBuilder, Rect, Vector3};
//!
//! let mut canvas = Canvas::new();
//! canvas.save();
//! canvas.translate(Vector3::new(20.0, 20.0, 0.0));
//! canvas.clip_path(PathBuilder::new().add_circle((50.0, 50.0).into(), 50.0).build());
//! canvas.draw_path(
//!     PathBuilder::new().add_rect(Rect::new(0.0, 0.0, 100.0, 100.0)).build(),
//!     Paint::fill(Color::SKY_BLUE),
//! );
//! canvas.restore();
//!
//! let picture = canvas.end_recording_as_picture();
//! // clip and draw; the clip restore replays but is not a drawing operation
//! assert_eq!(picture.len(), 2);
//! assert_eq!(picture.clip_restores().len(), 1);
//! ```

pub mod canvas;
pub mod paint;
pub mod picture;

pub use canvas::Canvas;
pub use paint::{Paint, PaintStyle};
pub use picture::{ClipRestore, Picture, PictureOperation};
