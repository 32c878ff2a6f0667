///
/// Identifier for a texture
///
/// Textures are bitmaps that are prepared elsewhere (for instance, a rasterized block of text) and
/// then drawn on to the surface
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureId(pub u64);

///
/// The position of a pixel within a texture, in pixels
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TexturePosition(pub u32, pub u32);

///
/// The width and height of a texture, in pixels
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TextureSize(pub u32, pub u32);

///
/// A region of a texture, in pixels
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TextureRect(pub TexturePosition, pub TextureSize);

///
/// A position in the current coordinate scheme of a surface
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct CanvasPosition(pub f32, pub f32);

///
/// Size of a region on the surface
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct CanvasSize(pub f32, pub f32);

///
/// A rectangle in the current coordinate scheme of a surface
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct CanvasRect(pub CanvasPosition, pub CanvasSize);

impl TextureRect {
    ///
    /// The rectangle covering the whole of a texture of the specified size
    ///
    pub fn whole(size: TextureSize) -> TextureRect {
        TextureRect(TexturePosition(0, 0), size)
    }
}

impl CanvasRect {
    ///
    /// Returns the corners of this rectangle, clockwise from the origin
    ///
    pub fn corners(&self) -> [(f32, f32); 4] {
        let CanvasRect(CanvasPosition(x, y), CanvasSize(w, h)) = *self;

        [(x, y), (x+w, y), (x+w, y+h), (x, y+h)]
    }
}
