use crate::camera::*;
use crate::blend_mode::*;

use flo_surface::{TextureId, TextureSize};

///
/// Style settings that affect how the text bitmap is drawn
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TextStyle {
    /// How many bitmap pixels were rendered for each unit of the display size
    pub resolution: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle { resolution: 1.0 }
    }
}

///
/// The bitmap that the text was rasterized into
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TextBitmap {
    /// The texture containing the rendered glyphs
    pub texture: TextureId,

    /// The size of the texture, in pixels
    pub size: TextureSize,
}

impl TextBitmap {
    ///
    /// Describes a bitmap stored in a texture of the specified size
    ///
    pub fn new(texture: TextureId, size: TextureSize) -> TextBitmap {
        TextBitmap { texture, size }
    }

    /// Width of the bitmap in pixels
    #[inline] pub fn width(&self) -> u32 { self.size.0 }

    /// Height of the bitmap in pixels
    #[inline] pub fn height(&self) -> u32 { self.size.1 }
}

///
/// A text game object
///
/// The text is laid out and rasterized before drawing; this holds the resulting bitmap together with the
/// transform state that decides where it appears.
///
#[derive(Clone, PartialEq, Debug)]
pub struct TextObject {
    /// The text that was rasterized into the bitmap
    pub text: String,

    /// Position in the world
    pub x: f32,
    pub y: f32,

    /// Rotation in radians
    pub rotation: f32,

    pub scale_x: f32,
    pub scale_y: f32,

    /// Set to mirror the bitmap horizontally about its own width
    pub flip_x: bool,

    /// Set to mirror the bitmap vertically about its own height
    pub flip_y: bool,

    /// Offset within the displayed bitmap that's treated as its position
    pub display_origin_x: f32,
    pub display_origin_y: f32,

    pub alpha: f32,
    pub blend_mode: GameBlendMode,

    /// How much the camera scroll affects the position (0.0 stays fixed on screen, 1.0 moves with the world)
    pub scroll_factor_x: f32,
    pub scroll_factor_y: f32,

    pub style: TextStyle,

    /// The rasterized text, or None if it hasn't been rasterized yet
    pub bitmap: Option<TextBitmap>,

    /// False to skip this object when rendering
    pub visible: bool,

    /// Bitmask of camera IDs that should not draw this object
    pub camera_filter: u32,
}

impl TextObject {
    ///
    /// Creates a visible, unscaled text object at the origin
    ///
    pub fn new(text: impl Into<String>, bitmap: Option<TextBitmap>) -> TextObject {
        TextObject {
            text:               text.into(),
            x:                  0.0,
            y:                  0.0,
            rotation:           0.0,
            scale_x:            1.0,
            scale_y:            1.0,
            flip_x:             false,
            flip_y:             false,
            display_origin_x:   0.0,
            display_origin_y:   0.0,
            alpha:              1.0,
            blend_mode:         GameBlendMode::Normal,
            scroll_factor_x:    1.0,
            scroll_factor_y:    1.0,
            style:              TextStyle::default(),
            bitmap:             bitmap,
            visible:            true,
            camera_filter:      0,
        }
    }

    ///
    /// Moves the text to a new position in the world
    ///
    pub fn set_position(&mut self, x: f32, y: f32) -> &mut TextObject {
        self.x = x;
        self.y = y;
        self
    }

    ///
    /// Sets the horizontal and vertical scale factors
    ///
    pub fn set_scale(&mut self, scale_x: f32, scale_y: f32) -> &mut TextObject {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    ///
    /// Sets whether the bitmap is mirrored horizontally and vertically
    ///
    pub fn set_flip(&mut self, flip_x: bool, flip_y: bool) -> &mut TextObject {
        self.flip_x = flip_x;
        self.flip_y = flip_y;
        self
    }

    ///
    /// Sets how far the text moves when the camera scrolls
    ///
    pub fn set_scroll_factor(&mut self, scroll_factor_x: f32, scroll_factor_y: f32) -> &mut TextObject {
        self.scroll_factor_x = scroll_factor_x;
        self.scroll_factor_y = scroll_factor_y;
        self
    }

    ///
    /// The size the bitmap takes up when drawn unscaled (its pixel size divided by the style resolution)
    ///
    pub fn display_size(&self) -> (f32, f32) {
        match &self.bitmap {
            Some(bitmap)    => (bitmap.width() as f32 / self.style.resolution, bitmap.height() as f32 / self.style.resolution),
            None            => (0.0, 0.0),
        }
    }

    ///
    /// Sets the display origin from a normalized origin (0.0, 0.0 is the top-left corner, 0.5, 0.5 is the center)
    ///
    pub fn set_origin(&mut self, origin_x: f32, origin_y: f32) -> &mut TextObject {
        let (width, height)     = self.display_size();

        self.display_origin_x   = origin_x * width;
        self.display_origin_y   = origin_y * height;
        self
    }

    ///
    /// True if this object should be drawn by the specified camera
    ///
    /// Objects are skipped when they are hidden, fully transparent, scaled to nothing or filtered out for the camera.
    ///
    pub fn will_render(&self, camera: &Camera) -> bool {
        self.visible
            && self.alpha != 0.0
            && self.scale_x != 0.0
            && self.scale_y != 0.0
            && (self.camera_filter & camera.id) == 0
    }
}
