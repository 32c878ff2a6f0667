use crate::error::*;
use crate::camera::*;
use crate::config::*;
use crate::blend_mode::*;
use crate::text_object::*;
use crate::render_text::*;

use flo_surface::*;

///
/// Renders text objects on to a graphics context using a fixed set of blend mode mappings
///
#[derive(Clone, PartialEq, Debug)]
pub struct TextCanvasRenderer {
    /// Maps the blend mode of each text object to the composite operation to use on the surface
    blend_modes: BlendModeTable,
}

impl TextCanvasRenderer {
    ///
    /// Creates a renderer for a surface that supports every composite operation
    ///
    pub fn new() -> TextCanvasRenderer {
        TextCanvasRenderer {
            blend_modes: BlendModeTable::new()
        }
    }

    ///
    /// Creates a renderer from a configuration
    ///
    pub fn with_config(config: &TextRendererConfig) -> TextCanvasRenderer {
        TextCanvasRenderer {
            blend_modes: config.blend_mode_table()
        }
    }

    ///
    /// The blend mode table used by this renderer
    ///
    pub fn blend_modes(&self) -> &BlendModeTable {
        &self.blend_modes
    }

    ///
    /// Draws a text object as seen by a camera, optionally inside a parent transform
    ///
    pub fn render<Gc>(&self, gc: &mut Gc, src: &TextObject, camera: &Camera, parent: Option<&Transform2D>) -> Result<TextRenderOutcome, TextRenderError>
    where
        Gc: ?Sized + GraphicsContext,
    {
        let outcome = render_text(gc, src, camera, parent, &self.blend_modes);

        match &outcome {
            Ok(TextRenderOutcome::Drawn)    => tracing::trace!(text = %src.text, x = src.x, y = src.y, "Drew text"),
            Ok(skipped)                     => tracing::trace!(text = %src.text, ?skipped, "Skipped text"),
            Err(err)                        => tracing::warn!(text = %src.text, %err, "Could not draw text"),
        }

        outcome
    }

    ///
    /// As for `render()`, except that objects that are hidden or filtered out for the camera are skipped
    ///
    pub fn render_if_visible<Gc>(&self, gc: &mut Gc, src: &TextObject, camera: &Camera, parent: Option<&Transform2D>) -> Result<TextRenderOutcome, TextRenderError>
    where
        Gc: ?Sized + GraphicsContext,
    {
        if !src.will_render(camera) {
            tracing::trace!(text = %src.text, camera = camera.id, "Text is hidden from camera");
            return Ok(TextRenderOutcome::Hidden);
        }

        self.render(gc, src, camera, parent)
    }
}

impl Default for TextCanvasRenderer {
    fn default() -> Self {
        TextCanvasRenderer::new()
    }
}
