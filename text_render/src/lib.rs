//!
//! # flo_text_render
//!
//! `flo_text_render` draws text game objects on to any `flo_surface::GraphicsContext`. The text itself is
//! laid out and rasterized elsewhere: a `TextObject` carries the resulting bitmap as a texture along with
//! its position, rotation, scale, flip, alpha and blend mode, and `render_text()` works out the transform
//! that puts that bitmap in the right place for a `Camera`.
//!
//! ```
//! # use flo_surface::*;
//! # use flo_text_render::*;
//! let mut text        = TextObject::new("Hi", Some(TextBitmap::new(TextureId(1), TextureSize(40, 20))));
//! text.set_position(100.0, 50.0);
//!
//! let renderer        = TextCanvasRenderer::new();
//! let mut drawing     = Vec::<Draw>::new();
//! let outcome         = renderer.render(&mut drawing, &text, &Camera::new(), None).unwrap();
//!
//! assert!(outcome == TextRenderOutcome::Drawn);
//! assert!(drawing.contains(&Draw::Translate(100.0, 50.0)));
//! ```
//!
//! Drawing is configured through a `TextRendererConfig`, which decides how each `GameBlendMode` maps on
//! to the composite operations supported by the surface.
//!

#[macro_use]
extern crate serde_derive;

mod error;
mod camera;
mod config;
mod blend_mode;
mod text_object;
mod render_text;
mod text_canvas_renderer;

pub use self::error::*;
pub use self::camera::*;
pub use self::config::*;
pub use self::blend_mode::*;
pub use self::text_object::*;
pub use self::render_text::*;
pub use self::text_canvas_renderer::*;
