//! Replaying pictures into a recording render pass

mod common;

use std::sync::Arc;

use quill_canvas::{Canvas, Paint};
use quill_gpu::{
    LinearGradientContents, PipelineKind, PrimitiveType, RecordingPass, RenderError,
    TextureContents,
};
use quill_paint::{Color, ISize, PathBuilder, Point, Rect, Vector3};

fn rect(x: f32, y: f32, w: f32, h: f32) -> quill_paint::Path {
    PathBuilder::new().add_rect(Rect::new(x, y, w, h)).build()
}

#[test]
fn test_replay_emits_one_command_per_operation() {
    common::init_tracing();
    let renderer = common::renderer();
    let mut pass = RecordingPass::new(ISize::new(640, 480));

    let gradient = LinearGradientContents::new(
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        &[Color::RED, Color::BLUE],
    );
    let texture = TextureContents::with_texture(common::texture(32, 32));
    let stroke_path = PathBuilder::new()
        .move_to(Point::new(0.0, 0.0))
        .line_to(Point::new(50.0, 50.0))
        .line_to(Point::new(100.0, 0.0))
        .build();

    let mut canvas = Canvas::new();
    canvas.draw_path(rect(0.0, 0.0, 100.0, 100.0), Paint::default().with_contents(gradient));
    canvas.draw_path(rect(0.0, 0.0, 64.0, 64.0), Paint::default().with_contents(texture));
    canvas.draw_path(stroke_path, Paint::stroke(Color::BLACK, 2.0));
    canvas.save();
    canvas.clip_path(rect(10.0, 10.0, 50.0, 50.0));
    canvas.draw_path(rect(0.0, 0.0, 100.0, 100.0), Paint::fill(Color::GREEN));
    canvas.restore();

    let picture = canvas.end_recording_as_picture();
    assert_eq!(picture.len(), 5);
    picture.render(&renderer, &mut pass).unwrap();

    let summary: Vec<(&str, PipelineKind, PrimitiveType, u32)> = pass
        .commands()
        .iter()
        .map(|cmd| {
            (
                cmd.label,
                cmd.pipeline.kind(),
                cmd.primitive_type,
                cmd.stencil_reference,
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            ("LinearGradientFill", PipelineKind::GradientFill, PrimitiveType::Triangle, 0),
            ("TextureFill", PipelineKind::Texture, PrimitiveType::Triangle, 0),
            ("SolidStroke", PipelineKind::SolidStroke, PrimitiveType::TriangleStrip, 0),
            ("Clip", PipelineKind::Clip, PrimitiveType::Triangle, 0),
            ("SolidFill", PipelineKind::SolidFill, PrimitiveType::Triangle, 1),
            ("Clip Restore", PipelineKind::ClipRestore, PrimitiveType::Triangle, 0),
        ]
    );
    assert!(!pass.transients().is_empty());
}

#[test]
fn test_no_op_contents_emit_nothing() {
    let renderer = common::renderer();
    let mut pass = RecordingPass::new(ISize::new(640, 480));

    let mut empty_source = TextureContents::new();
    empty_source.set_texture(common::texture(16, 16));

    let mut canvas = Canvas::new();
    canvas.draw_path(rect(0.0, 0.0, 10.0, 10.0), Paint::fill(Color::TRANSPARENT));
    canvas.draw_path(rect(0.0, 0.0, 10.0, 10.0), Paint::stroke(Color::RED, 0.0));
    canvas.draw_path(
        rect(0.0, 0.0, 10.0, 10.0),
        Paint::default().with_contents(TextureContents::with_texture(common::texture(0, 0))),
    );
    canvas.draw_path(
        rect(0.0, 0.0, 10.0, 10.0),
        Paint::default().with_contents(empty_source),
    );

    let picture = canvas.end_recording_as_picture();
    assert_eq!(picture.len(), 4);
    picture.render(&renderer, &mut pass).unwrap();
    assert!(pass.commands().is_empty());
}

#[test]
fn test_replay_stops_at_first_failure() {
    common::init_tracing();
    let renderer = common::renderer_without(PipelineKind::SolidStroke);
    let mut pass = RecordingPass::new(ISize::new(100, 100));

    let mut canvas = Canvas::new();
    canvas.draw_path(rect(0.0, 0.0, 10.0, 10.0), Paint::fill(Color::RED));
    canvas.draw_path(rect(0.0, 0.0, 10.0, 10.0), Paint::stroke(Color::RED, 1.0));
    canvas.draw_path(rect(0.0, 0.0, 10.0, 10.0), Paint::fill(Color::BLUE));

    let err = canvas
        .end_recording_as_picture()
        .render(&renderer, &mut pass)
        .unwrap_err();
    assert_eq!(err, RenderError::PipelineUnavailable(PipelineKind::SolidStroke));
    assert_eq!(pass.commands().len(), 1);
}

#[test]
fn test_full_pass_rejects_command() {
    let renderer = common::renderer();
    let mut pass = RecordingPass::new(ISize::new(100, 100)).with_capacity_limit(1);

    let mut canvas = Canvas::new();
    canvas.draw_path(rect(0.0, 0.0, 10.0, 10.0), Paint::fill(Color::RED));
    canvas.draw_path(rect(0.0, 0.0, 10.0, 10.0), Paint::fill(Color::BLUE));

    let err = canvas
        .end_recording_as_picture()
        .render(&renderer, &mut pass)
        .unwrap_err();
    assert_eq!(err, RenderError::CommandRejected("SolidFill"));
    assert_eq!(pass.commands().len(), 1);
}

#[test]
fn test_nested_picture_replays_under_outer_transform() {
    let renderer = common::renderer();
    let mut pass = RecordingPass::new(ISize::new(200, 200));

    let mut inner = Canvas::new();
    inner.draw_path(rect(0.0, 0.0, 10.0, 10.0), Paint::fill(Color::RED));
    let inner = Arc::new(inner.end_recording_as_picture());

    let mut outer = Canvas::new();
    outer.translate(Vector3::new(50.0, 50.0, 0.0));
    outer.draw_picture(Arc::clone(&inner));
    outer.draw_picture(inner);
    let picture = outer.end_recording_as_picture();

    let entities = picture.entities();
    assert_eq!(entities.len(), 2);
    assert_eq!(
        entities[0].coverage(),
        Some(Rect::new(50.0, 50.0, 10.0, 10.0))
    );

    picture.render(&renderer, &mut pass).unwrap();
    assert_eq!(pass.commands().len(), 2);
}

#[test]
fn test_open_clip_in_nested_picture_ends_with_it() {
    let renderer = common::renderer();
    let mut pass = RecordingPass::new(ISize::new(200, 200));

    let mut inner = Canvas::new();
    inner.clip_path(rect(0.0, 0.0, 10.0, 10.0));
    inner.draw_path(rect(0.0, 0.0, 10.0, 10.0), Paint::fill(Color::RED));
    let inner = Arc::new(inner.end_recording_as_picture());

    let mut outer = Canvas::new();
    outer.draw_picture(inner);
    outer.draw_path(rect(0.0, 0.0, 100.0, 100.0), Paint::fill(Color::BLUE));
    let picture = outer.end_recording_as_picture();
    assert_eq!(picture.len(), 2);

    picture.render(&renderer, &mut pass).unwrap();
    let summary: Vec<(&str, u32)> = pass
        .commands()
        .iter()
        .map(|cmd| (cmd.label, cmd.stencil_reference))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Clip", 0),
            ("SolidFill", 1),
            ("Clip Restore", 0),
            ("SolidFill", 0),
        ]
    );
}

#[test]
fn test_shadow_replays_as_offset_fill() {
    let renderer = common::renderer();
    let mut pass = RecordingPass::new(ISize::new(200, 200));

    let mut canvas = Canvas::new();
    canvas.draw_shadow(rect(0.0, 0.0, 20.0, 20.0), Color::BLACK.with_alpha(0.25), 6.0);
    let picture = canvas.end_recording_as_picture();

    assert_eq!(
        picture.entities()[0].coverage(),
        Some(Rect::new(0.0, 6.0, 20.0, 20.0))
    );
    picture.render(&renderer, &mut pass).unwrap();
    let [cmd] = pass.commands() else {
        panic!("expected exactly one command");
    };
    assert_eq!(cmd.label, "SolidFill");
}
