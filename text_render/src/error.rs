use thiserror::Error;

///
/// Reasons a text object can't be drawn
///
/// These are all problems with the text object itself: they are detected before anything is sent to the
/// graphics context, so the surface is never left in a half-drawn state.
///
#[derive(Error, Clone, Copy, PartialEq, Debug)]
pub enum TextRenderError {
    /// The text has not been rasterized into a bitmap yet
    #[error("text object has no rasterized bitmap")]
    MissingBitmap,

    /// The bitmap for the text has no pixels
    #[error("text bitmap is empty ({width}x{height})")]
    EmptyBitmap { width: u32, height: u32 },

    /// The resolution of the text style can't be used to size the bitmap
    #[error("text style resolution must be a positive number (was {0})")]
    InvalidResolution(f32),
}
