//!
//! # flo_surface
//!
//! `flo_surface` describes the set of actions that can be performed on a 2D drawing surface: saving
//! and restoring state, composing transforms, choosing how pixels are composited and drawing regions
//! of pre-rendered bitmaps into the canvas.
//!
//! The main features are the `Draw` enum, the `GraphicsContext` trait that any surface can implement,
//! and a few ready-made surfaces:
//!
//! * `Vec<Draw>` records the instructions it receives
//! * `SoftwareSurface` tracks the transform, alpha and blend state the way an HTML canvas does and
//!   records where each image lands
//! * `DrawingTarget` streams batches of instructions to another part of the application (usually a
//!   render thread), one batch at a time
//!
//! State changes should be made through a `StateGuard` (see `GraphicsPrimitives::state_guard()`), which
//! guarantees that every `PushState` is followed by a matching `PopState`.
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

mod draw;
mod context;
mod texture;
mod primitives;
mod transform2d;
mod state_guard;
mod draw_stream;
mod drawing_target;
mod software_surface;

pub use self::draw::*;
pub use self::context::*;
pub use self::texture::*;
pub use self::primitives::*;
pub use self::transform2d::*;
pub use self::state_guard::*;
pub use self::draw_stream::*;
pub use self::drawing_target::*;
pub use self::software_surface::*;
