//!
//! Actions that can be performed to draw on a surface
//!

use crate::texture::*;
use crate::transform2d::*;

///
/// Composite operation to use when drawing
///
/// These are the pixel-combining rules supported by a HTML canvas `globalCompositeOperation`: the
/// Porter-Duff operators, `Lighter` (additive) and the separable and non-separable blend modes.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum BlendMode {
    SourceOver,
    SourceIn,
    SourceOut,
    DestinationOver,
    DestinationIn,
    DestinationOut,
    SourceAtop,
    DestinationAtop,

    /// Adds the source and destination colours
    Lighter,

    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,

    Hue,
    Saturation,
    Color,
    Luminosity,
}

impl Default for BlendMode {
    fn default() -> Self {
        BlendMode::SourceOver
    }
}

impl BlendMode {
    ///
    /// The name of this operation as used by `globalCompositeOperation` on a HTML canvas
    ///
    pub fn composite_operation_name(&self) -> &'static str {
        use self::BlendMode::*;

        match self {
            SourceOver      => "source-over",
            SourceIn        => "source-in",
            SourceOut       => "source-out",
            DestinationOver => "destination-over",
            DestinationIn   => "destination-in",
            DestinationOut  => "destination-out",
            SourceAtop      => "source-atop",
            DestinationAtop => "destination-atop",
            Lighter         => "lighter",
            Multiply        => "multiply",
            Screen          => "screen",
            Overlay         => "overlay",
            Darken          => "darken",
            Lighten         => "lighten",
            ColorDodge      => "color-dodge",
            ColorBurn       => "color-burn",
            HardLight       => "hard-light",
            SoftLight       => "soft-light",
            Difference      => "difference",
            Exclusion       => "exclusion",
            Hue             => "hue",
            Saturation      => "saturation",
            Color           => "color",
            Luminosity      => "luminosity",
        }
    }

    ///
    /// True if this is one of the operations that older surfaces may not support
    ///
    /// Surfaces that only implement the Porter-Duff operators and `Lighter` will substitute `SourceOver` for these
    ///
    pub fn is_extended(&self) -> bool {
        use self::BlendMode::*;

        match self {
            SourceOver | SourceIn | SourceOut | DestinationOver | DestinationIn | DestinationOut | SourceAtop | DestinationAtop | Lighter => false,
            _ => true
        }
    }
}

///
/// Instructions for drawing to a surface
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Draw {
    /// Suspends rendering to the display until the next 'ShowFrame'
    ///
    /// If 'StartFrame' is nested, then the frame won't be displayed until 'ShowFrame' has been requested
    /// at least that many times.
    StartFrame,

    /// Displays any requested queued after 'StartFrame'
    ShowFrame,

    /// Push the current state of the surface
    PushState,

    /// Restore a state previously pushed
    ///
    /// This will restore the transform, the global alpha and the blend mode
    PopState,

    /// Reset the transformation to the identity transformation
    IdentityTransform,

    /// Multiply a 2D transform into the surface
    MultiplyTransform(Transform2D),

    /// Moves the origin by the specified amounts
    Translate(f32, f32),

    /// Rotates about the origin by an angle in radians
    Rotate(f32),

    /// Scales by the specified x and y factors about the origin
    Scale(f32, f32),

    /// Set how future renderings are blended with one another
    BlendMode(BlendMode),

    /// Sets the alpha value applied to everything drawn from now on (0.0-1.0)
    GlobalAlpha(f32),

    /// Draws a region of a texture, scaled to fit a rectangle in the current coordinate scheme
    DrawImage(TextureId, TextureRect, CanvasRect),
}

impl Draw {
    ///
    /// True if this instruction changes the pixels of the surface (as opposed to its state)
    ///
    pub fn is_drawing(&self) -> bool {
        match self {
            Draw::DrawImage(..) => true,
            _                   => false
        }
    }
}
