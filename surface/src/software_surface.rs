use crate::draw::*;
use crate::texture::*;
use crate::context::*;
use crate::transform2d::*;

use smallvec::*;

///
/// The state that is saved by `push_state()` and restored by `pop_state()`
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SurfaceState {
    /// The transform applied to coordinates
    pub transform: Transform2D,

    /// The alpha value applied to everything that's drawn
    pub alpha: f32,

    /// How new drawing is composited with the existing surface
    pub blend_mode: BlendMode,
}

impl Default for SurfaceState {
    fn default() -> Self {
        SurfaceState {
            transform:  Transform2D::identity(),
            alpha:      1.0,
            blend_mode: BlendMode::SourceOver,
        }
    }
}

///
/// Describes where an image ended up after being drawn on a software surface
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PlacedImage {
    /// The texture that was drawn
    pub texture: TextureId,

    /// The region of the texture that was drawn
    pub source: TextureRect,

    /// The corners of the destination rectangle after the transform was applied, in the same order as `CanvasRect::corners()`
    ///
    /// The first corner is where the top-left pixel of the source region ends up.
    pub corners: [(f32, f32); 4],

    /// The global alpha when the image was drawn
    pub alpha: f32,

    /// The blend mode when the image was drawn
    pub blend_mode: BlendMode,
}

///
/// A graphics context that follows the state of a surface without rasterizing anything
///
/// This follows the rules of a HTML canvas: the transform, global alpha and blend mode are all part of
/// the state saved by `push_state()`. Every image that's drawn is recorded along with where it was placed.
///
#[derive(Clone, Debug)]
pub struct SoftwareSurface {
    /// The active state
    state: SurfaceState,

    /// States saved by `push_state()`
    stack: SmallVec<[SurfaceState; 4]>,

    /// How many `start_frame()` calls are waiting for a `show_frame()`
    frame_depth: usize,

    /// The images that have been drawn so far
    images: Vec<PlacedImage>,
}

impl SoftwareSurface {
    ///
    /// Creates a new surface with the identity transform and no images
    ///
    pub fn new() -> SoftwareSurface {
        SoftwareSurface {
            state:          SurfaceState::default(),
            stack:          smallvec![],
            frame_depth:    0,
            images:         vec![],
        }
    }

    ///
    /// The state that will be used for the next drawing operation
    ///
    #[inline]
    pub fn state(&self) -> &SurfaceState {
        &self.state
    }

    ///
    /// The current transform
    ///
    #[inline]
    pub fn current_transform(&self) -> Transform2D {
        self.state.transform
    }

    ///
    /// The number of states that have been pushed and not yet popped
    ///
    #[inline]
    pub fn state_depth(&self) -> usize {
        self.stack.len()
    }

    ///
    /// True if a frame has been started and not shown yet
    ///
    #[inline]
    pub fn in_frame(&self) -> bool {
        self.frame_depth > 0
    }

    ///
    /// The images drawn on this surface, in the order they were drawn
    ///
    #[inline]
    pub fn images(&self) -> &[PlacedImage] {
        &self.images
    }

    ///
    /// Removes the record of the images drawn so far, leaving the state as it is
    ///
    pub fn take_images(&mut self) -> Vec<PlacedImage> {
        std::mem::take(&mut self.images)
    }
}

impl Default for SoftwareSurface {
    fn default() -> Self {
        SoftwareSurface::new()
    }
}

impl GraphicsContext for SoftwareSurface {
    fn start_frame(&mut self) {
        self.frame_depth += 1;
    }

    fn show_frame(&mut self) {
        self.frame_depth = self.frame_depth.saturating_sub(1);
    }

    fn push_state(&mut self) {
        self.stack.push(self.state);
    }

    fn pop_state(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        } else {
            tracing::warn!("pop_state() without a matching push_state()");
        }
    }

    fn identity_transform(&mut self) {
        self.state.transform = Transform2D::identity();
    }

    fn transform(&mut self, transform: Transform2D) {
        self.state.transform *= transform;
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.state.transform *= Transform2D::translate(x, y);
    }

    fn rotate(&mut self, radians: f32) {
        self.state.transform *= Transform2D::rotate(radians);
    }

    fn scale(&mut self, scale_x: f32, scale_y: f32) {
        self.state.transform *= Transform2D::scale(scale_x, scale_y);
    }

    fn blend_mode(&mut self, mode: BlendMode) {
        self.state.blend_mode = mode;
    }

    fn global_alpha(&mut self, alpha: f32) {
        // As for a canvas, values outside of the 0-1 range are ignored
        if (0.0..=1.0).contains(&alpha) {
            self.state.alpha = alpha;
        }
    }

    fn draw_image(&mut self, texture: TextureId, source: TextureRect, dest: CanvasRect) {
        let transform   = &self.state.transform;
        let corners     = dest.corners().map(|(x, y)| transform.transform_point(x, y));

        self.images.push(PlacedImage {
            texture:    texture,
            source:     source,
            corners:    corners,
            alpha:      self.state.alpha,
            blend_mode: self.state.blend_mode,
        });
    }
}
