use crate::error::*;
use crate::camera::*;
use crate::blend_mode::*;
use crate::text_object::*;

use flo_surface::*;

///
/// What happened when a text object was rendered
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TextRenderOutcome {
    /// The text bitmap was drawn
    Drawn,

    /// Nothing was drawn because the text is empty
    EmptyText,

    /// Nothing was drawn because the combined camera and object alpha is 0
    Transparent,

    /// Nothing was drawn because the object is hidden or filtered out for the camera
    Hidden,
}

///
/// Truncates a coordinate to a whole number of pixels, rounding toward zero
///
/// `2.7` becomes `2` and `-2.7` becomes `-2`. Values that are not finite become `0`.
///
#[inline]
pub fn round_pixel(value: f32) -> f32 {
    if value.is_finite() {
        value.trunc()
    } else {
        0.0
    }
}

///
/// Checks that a text object has a bitmap that can be drawn, returning it
///
fn drawable_bitmap(src: &TextObject) -> Result<TextBitmap, TextRenderError> {
    let bitmap      = src.bitmap.ok_or(TextRenderError::MissingBitmap)?;
    let resolution  = src.style.resolution;

    if bitmap.width() == 0 || bitmap.height() == 0 {
        return Err(TextRenderError::EmptyBitmap { width: bitmap.width(), height: bitmap.height() });
    }

    if !resolution.is_finite() || resolution <= 0.0 {
        return Err(TextRenderError::InvalidResolution(resolution));
    }

    Ok(bitmap)
}

///
/// Draws the bitmap of a text object on to a graphics context, as seen by a camera
///
/// Empty text and text that ends up fully transparent are skipped without sending anything to the context. A
/// text object that has no bitmap (or an unusable one) is an error, which is also reported before anything is
/// sent to the context.
///
/// The blend mode and alpha are set on the context as it is; everything else happens inside a pushed state:
/// the parent transform (for objects nested in a container), the camera-relative position, the rotation and
/// the scale of the object, and finally the flip, which is applied about the bitmap's own size so the text
/// stays in place when mirrored.
///
pub fn render_text<Gc>(gc: &mut Gc, src: &TextObject, camera: &Camera, parent: Option<&Transform2D>, blend_modes: &BlendModeTable) -> Result<TextRenderOutcome, TextRenderError>
where
    Gc: ?Sized + GraphicsContext,
{
    if src.text.is_empty() {
        return Ok(TextRenderOutcome::EmptyText);
    }

    let alpha = camera.alpha * src.alpha;
    if alpha == 0.0 {
        return Ok(TextRenderOutcome::Transparent);
    }

    let bitmap          = drawable_bitmap(src)?;
    let TextureSize(width, height) = bitmap.size;
    let (width, height) = (width as f32, height as f32);

    gc.blend_mode(blend_modes.composite_operation(src.blend_mode));
    gc.global_alpha(alpha);

    let mut gc = StateGuard::new(gc);

    if let Some(parent) = parent {
        gc.transform(*parent);
    }

    // Position relative to the camera
    let mut tx = src.x - camera.scroll_x * src.scroll_factor_x;
    let mut ty = src.y - camera.scroll_y * src.scroll_factor_y;

    if camera.round_pixels {
        tx = round_pixel(tx);
        ty = round_pixel(ty);
    }

    gc.translate(tx, ty);
    gc.rotate(src.rotation);
    gc.scale(src.scale_x, src.scale_y);

    // Flipping mirrors about the bitmap's own size
    let flip_x = if src.flip_x { 1.0 } else { 0.0 };
    let flip_y = if src.flip_y { 1.0 } else { 0.0 };
    gc.translate(width * flip_x, height * flip_y);
    gc.scale(if src.flip_x { -1.0 } else { 1.0 }, if src.flip_y { -1.0 } else { 1.0 });

    let resolution  = src.style.resolution;
    let dest        = CanvasRect(CanvasPosition(-src.display_origin_x, -src.display_origin_y), CanvasSize(width / resolution, height / resolution));
    gc.draw_image(bitmap.texture, TextureRect::whole(bitmap.size), dest);

    Ok(TextRenderOutcome::Drawn)
}
