use flo_surface::*;
use flo_text_render::*;

use futures::executor;
use futures::prelude::*;

fn close((x1, y1): (f32, f32), (x2, y2): (f32, f32)) -> bool {
    (x1-x2).abs() < 0.001 && (y1-y2).abs() < 0.001
}

fn hello_text() -> TextObject {
    let mut text = TextObject::new("Hi", Some(TextBitmap::new(TextureId(1), TextureSize(40, 20))));
    text.set_position(100.0, 50.0);

    text
}

fn draw_text(text: &TextObject, camera: &Camera, parent: Option<&Transform2D>) -> (Result<TextRenderOutcome, TextRenderError>, Vec<Draw>) {
    let mut drawing = Vec::<Draw>::new();
    let result      = render_text(&mut drawing, text, camera, parent, &BlendModeTable::new());

    (result, drawing)
}

#[test]
fn draw_simple_text() {
    let (result, drawing) = draw_text(&hello_text(), &Camera::new(), None);

    assert!(result == Ok(TextRenderOutcome::Drawn));
    assert!(drawing == vec![
        Draw::BlendMode(BlendMode::SourceOver),
        Draw::GlobalAlpha(1.0),
        Draw::PushState,
        Draw::Translate(100.0, 50.0),
        Draw::Rotate(0.0),
        Draw::Scale(1.0, 1.0),
        Draw::Translate(0.0, 0.0),
        Draw::Scale(1.0, 1.0),
        Draw::DrawImage(TextureId(1), TextureRect(TexturePosition(0, 0), TextureSize(40, 20)), CanvasRect(CanvasPosition(0.0, 0.0), CanvasSize(40.0, 20.0))),
        Draw::PopState,
    ]);
}

#[test]
fn empty_text_draws_nothing() {
    let mut text        = hello_text();
    text.text           = String::new();

    let (result, drawing) = draw_text(&text, &Camera::new(), None);

    assert!(result == Ok(TextRenderOutcome::EmptyText));
    assert!(drawing.is_empty());
}

#[test]
fn empty_text_without_bitmap_is_not_an_error() {
    let text = TextObject::new("", None);

    let (result, drawing) = draw_text(&text, &Camera::new(), None);

    assert!(result == Ok(TextRenderOutcome::EmptyText));
    assert!(drawing.is_empty());
}

#[test]
fn transparent_text_draws_nothing() {
    let mut text        = hello_text();
    text.alpha          = 0.0;

    let (result, drawing) = draw_text(&text, &Camera::new(), None);

    assert!(result == Ok(TextRenderOutcome::Transparent));
    assert!(drawing.is_empty());
}

#[test]
fn transparent_camera_draws_nothing() {
    let mut camera = Camera::new();
    camera.set_alpha(0.0);

    let (result, drawing) = draw_text(&hello_text(), &camera, None);

    assert!(result == Ok(TextRenderOutcome::Transparent));
    assert!(drawing.is_empty());
}

#[test]
fn alpha_combines_camera_and_text() {
    let mut text    = hello_text();
    let mut camera  = Camera::new();
    text.alpha      = 0.5;
    camera.set_alpha(0.5);

    let (_, drawing) = draw_text(&text, &camera, None);

    assert!(drawing[1] == Draw::GlobalAlpha(0.25));
}

#[test]
fn push_and_pop_are_balanced() {
    let mut text = hello_text();
    text.set_flip(true, true).set_scale(2.0, -3.0);
    text.rotation = 1.2;

    let (_, drawing)    = draw_text(&text, &Camera::new(), Some(&Transform2D::translate(5.0, 5.0)));
    let pushes          = drawing.iter().filter(|draw| **draw == Draw::PushState).count();
    let pops            = drawing.iter().filter(|draw| **draw == Draw::PopState).count();

    assert!(pushes == 1);
    assert!(pops == 1);
    assert!(drawing.last() == Some(&Draw::PopState));
}

#[test]
fn surface_transform_is_restored_after_drawing() {
    let mut surface = SoftwareSurface::new();
    surface.translate(7.0, 9.0);
    let before = surface.current_transform();

    let mut text = hello_text();
    text.set_flip(true, false).set_scale(1.5, 0.5);
    text.rotation = 0.7;

    let result = render_text(&mut surface, &text, &Camera::new(), Some(&Transform2D::scale(2.0, 2.0)), &BlendModeTable::new());

    assert!(result == Ok(TextRenderOutcome::Drawn));
    assert!(surface.state_depth() == 0);
    assert!(surface.current_transform() == before);
}

#[test]
fn round_pixels_truncates_toward_zero() {
    let mut camera  = Camera::new();
    camera.set_round_pixels(true);

    let mut text    = hello_text();
    text.set_position(2.7, -2.7);

    let (_, drawing) = draw_text(&text, &camera, None);

    assert!(drawing[3] == Draw::Translate(2.0, -2.0));
}

#[test]
fn without_round_pixels_position_is_fractional() {
    let mut text = hello_text();
    text.set_position(2.7, -2.7);

    let (_, drawing) = draw_text(&text, &Camera::new(), None);

    assert!(drawing[3] == Draw::Translate(2.7, -2.7));
}

#[test]
fn camera_scroll_uses_scroll_factor() {
    let mut camera  = Camera::new();
    camera.set_scroll(30.0, 40.0);

    let mut text    = hello_text();
    text.set_scroll_factor(0.5, 0.0);

    let (_, drawing) = draw_text(&text, &camera, None);

    assert!(drawing[3] == Draw::Translate(85.0, 50.0));
}

#[test]
fn parent_transform_is_applied_before_position() {
    let parent          = Transform2D::translate(10.0, 20.0) * Transform2D::rotate(0.5);
    let (_, drawing)    = draw_text(&hello_text(), &Camera::new(), Some(&parent));

    assert!(drawing[2] == Draw::PushState);
    assert!(drawing[3] == Draw::MultiplyTransform(parent));
    assert!(drawing[4] == Draw::Translate(100.0, 50.0));
}

#[test]
fn parent_transform_moves_the_image() {
    let mut surface = SoftwareSurface::new();
    let parent      = Transform2D::translate(10.0, 20.0);

    render_text(&mut surface, &hello_text(), &Camera::new(), Some(&parent), &BlendModeTable::new()).unwrap();

    let image = surface.images()[0];
    assert!(close(image.corners[0], (110.0, 70.0)));
    assert!(close(image.corners[2], (150.0, 90.0)));
}

#[test]
fn flip_x_mirrors_in_place() {
    let mut plain_surface   = SoftwareSurface::new();
    let mut flipped_surface = SoftwareSurface::new();

    let plain               = hello_text();
    let mut flipped         = hello_text();
    flipped.set_flip(true, false);

    render_text(&mut plain_surface, &plain, &Camera::new(), None, &BlendModeTable::new()).unwrap();
    render_text(&mut flipped_surface, &flipped, &Camera::new(), None, &BlendModeTable::new()).unwrap();

    let plain_image         = plain_surface.images()[0];
    let flipped_image       = flipped_surface.images()[0];

    // The unflipped text covers 100..140 with the left edge of the bitmap at 100
    assert!(close(plain_image.corners[0], (100.0, 50.0)));
    assert!(close(plain_image.corners[1], (140.0, 50.0)));

    // The flipped text covers the same region, but the left edge of the bitmap is now at 140
    assert!(close(flipped_image.corners[0], (140.0, 50.0)));
    assert!(close(flipped_image.corners[1], (100.0, 50.0)));
    assert!(close(flipped_image.corners[2], (100.0, 70.0)));
}

#[test]
fn flip_y_mirrors_in_place() {
    let mut surface = SoftwareSurface::new();
    let mut text    = hello_text();
    text.set_flip(false, true);

    render_text(&mut surface, &text, &Camera::new(), None, &BlendModeTable::new()).unwrap();

    let image = surface.images()[0];
    assert!(close(image.corners[0], (100.0, 70.0)));
    assert!(close(image.corners[2], (140.0, 50.0)));
}

#[test]
fn resolution_shrinks_destination() {
    let mut text            = TextObject::new("Hi", Some(TextBitmap::new(TextureId(2), TextureSize(80, 40))));
    text.style.resolution   = 2.0;
    text.set_flip(true, false);
    text.set_origin(0.5, 0.5);

    let (_, drawing) = draw_text(&text, &Camera::new(), None);

    // The flip translation uses the size of the bitmap itself
    assert!(drawing[6] == Draw::Translate(80.0, 0.0));
    assert!(drawing[8] == Draw::DrawImage(TextureId(2), TextureRect(TexturePosition(0, 0), TextureSize(80, 40)), CanvasRect(CanvasPosition(-20.0, -10.0), CanvasSize(40.0, 20.0))));
}

#[test]
fn missing_bitmap_is_an_error() {
    let text = TextObject::new("Hi", None);

    let (result, drawing) = draw_text(&text, &Camera::new(), None);

    assert!(result == Err(TextRenderError::MissingBitmap));
    assert!(drawing.is_empty());
}

#[test]
fn empty_bitmap_is_an_error() {
    let text = TextObject::new("Hi", Some(TextBitmap::new(TextureId(1), TextureSize(0, 20))));

    let (result, drawing) = draw_text(&text, &Camera::new(), None);

    assert!(result == Err(TextRenderError::EmptyBitmap { width: 0, height: 20 }));
    assert!(drawing.is_empty());
}

#[test]
fn invalid_resolution_is_an_error() {
    let mut text            = hello_text();
    text.style.resolution   = -1.0;

    let (result, drawing) = draw_text(&text, &Camera::new(), None);

    assert!(result == Err(TextRenderError::InvalidResolution(-1.0)));
    assert!(drawing.is_empty());
}

#[test]
fn blend_mode_comes_from_table() {
    let mut text        = hello_text();
    text.blend_mode     = GameBlendMode::Add;

    let (_, drawing)    = draw_text(&text, &Camera::new(), None);

    assert!(drawing[0] == Draw::BlendMode(BlendMode::Lighter));
}

#[test]
fn basic_config_replaces_extended_blend_modes() {
    let mut config              = TextRendererConfig::default();
    config.extended_blend_modes = false;

    let renderer                = TextCanvasRenderer::with_config(&config);
    let mut text                = hello_text();
    text.blend_mode             = GameBlendMode::Multiply;

    let mut surface             = SoftwareSurface::new();
    renderer.render(&mut surface, &text, &Camera::new(), None).unwrap();

    assert!(surface.images()[0].blend_mode == BlendMode::SourceOver);
}

#[test]
fn hidden_text_is_skipped() {
    let renderer        = TextCanvasRenderer::new();
    let mut text        = hello_text();
    text.visible        = false;

    let mut drawing     = Vec::<Draw>::new();
    let result          = renderer.render_if_visible(&mut drawing, &text, &Camera::new(), None);

    assert!(result == Ok(TextRenderOutcome::Hidden));
    assert!(drawing.is_empty());
}

#[test]
fn filtered_camera_is_skipped() {
    let renderer        = TextCanvasRenderer::new();
    let mut text        = hello_text();
    text.camera_filter  = 4;

    let mut drawing     = Vec::<Draw>::new();
    let hidden          = renderer.render_if_visible(&mut drawing, &text, &Camera::new().with_id(4), None);
    let shown           = renderer.render_if_visible(&mut drawing, &text, &Camera::new().with_id(1), None);

    assert!(hidden == Ok(TextRenderOutcome::Hidden));
    assert!(shown == Ok(TextRenderOutcome::Drawn));
    assert!(drawing.iter().filter(|draw| draw.is_drawing()).count() == 1);
}

#[test]
fn render_through_dynamic_context() {
    let renderer                        = TextCanvasRenderer::new();
    let mut surface                     = SoftwareSurface::new();
    let gc: &mut dyn GraphicsContext    = &mut surface;

    let result = renderer.render(gc, &hello_text(), &Camera::new(), None);

    assert!(result == Ok(TextRenderOutcome::Drawn));
    assert!(surface.images().len() == 1);
}

#[test]
fn render_to_drawing_target() {
    let renderer            = TextCanvasRenderer::new();
    let (target, stream)    = DrawingTarget::new();

    let drawn   = target.try_draw(|gc| renderer.render(gc, &hello_text(), &Camera::new(), None));
    let failed  = target.try_draw(|gc| renderer.render(gc, &TextObject::new("Oops", None), &Camera::new(), None));
    drop(target);

    assert!(drawn == Ok(TextRenderOutcome::Drawn));
    assert!(failed == Err(TextRenderError::MissingBitmap));

    // Only the successful render reaches the stream
    let drawing = executor::block_on(stream.collect::<Vec<_>>());

    assert!(drawing.first() == Some(&Draw::StartFrame));
    assert!(drawing.last() == Some(&Draw::ShowFrame));
    assert!(drawing.iter().filter(|draw| draw.is_drawing()).count() == 1);
}

#[test]
fn instructions_replay_on_software_surface() {
    let mut text = hello_text();
    text.set_flip(true, false);

    let (_, drawing)    = draw_text(&text, &Camera::new(), None);
    let mut surface     = SoftwareSurface::new();
    surface.draw_list(drawing);

    let image = surface.images()[0];
    assert!(close(image.corners[0], (140.0, 50.0)));
    assert!(surface.state_depth() == 0);
}
