use super::draw::*;
use super::texture::*;
use super::transform2d::*;

///
/// A graphics context provides the basic set of graphics actions that can be performed on a surface
///
pub trait GraphicsContext {
    fn start_frame(&mut self);
    fn show_frame(&mut self);

    fn push_state(&mut self);
    fn pop_state(&mut self);

    fn identity_transform(&mut self);
    fn transform(&mut self, transform: Transform2D);
    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, radians: f32);
    fn scale(&mut self, scale_x: f32, scale_y: f32);

    fn blend_mode(&mut self, mode: BlendMode);
    fn global_alpha(&mut self, alpha: f32);

    fn draw_image(&mut self, texture_id: TextureId, source: TextureRect, dest: CanvasRect);

    fn draw(&mut self, d: Draw) {
        use self::Draw::*;

        match d {
            StartFrame                          => self.start_frame(),
            ShowFrame                           => self.show_frame(),
            PushState                           => self.push_state(),
            PopState                            => self.pop_state(),
            IdentityTransform                   => self.identity_transform(),
            MultiplyTransform(transform)        => self.transform(transform),
            Translate(x, y)                     => self.translate(x, y),
            Rotate(radians)                     => self.rotate(radians),
            Scale(scale_x, scale_y)             => self.scale(scale_x, scale_y),
            BlendMode(blend_mode)               => self.blend_mode(blend_mode),
            GlobalAlpha(alpha)                  => self.global_alpha(alpha),
            DrawImage(texture, source, dest)    => self.draw_image(texture, source, dest),
        }
    }
}

///
/// A Vec<Draw> can be treated as a target for graphics primitives (just pushing the appropriate draw instructions)
///
impl GraphicsContext for Vec<Draw> {
    #[inline] fn start_frame(&mut self)                                                         { self.push(Draw::StartFrame); }
    #[inline] fn show_frame(&mut self)                                                          { self.push(Draw::ShowFrame); }
    #[inline] fn push_state(&mut self)                                                          { self.push(Draw::PushState); }
    #[inline] fn pop_state(&mut self)                                                           { self.push(Draw::PopState); }
    #[inline] fn identity_transform(&mut self)                                                  { self.push(Draw::IdentityTransform); }
    #[inline] fn transform(&mut self, transform: Transform2D)                                   { self.push(Draw::MultiplyTransform(transform)); }
    #[inline] fn translate(&mut self, x: f32, y: f32)                                           { self.push(Draw::Translate(x, y)); }
    #[inline] fn rotate(&mut self, radians: f32)                                                { self.push(Draw::Rotate(radians)); }
    #[inline] fn scale(&mut self, scale_x: f32, scale_y: f32)                                   { self.push(Draw::Scale(scale_x, scale_y)); }
    #[inline] fn blend_mode(&mut self, mode: BlendMode)                                         { self.push(Draw::BlendMode(mode)); }
    #[inline] fn global_alpha(&mut self, alpha: f32)                                            { self.push(Draw::GlobalAlpha(alpha)); }
    #[inline] fn draw_image(&mut self, texture: TextureId, source: TextureRect, dest: CanvasRect) { self.push(Draw::DrawImage(texture, source, dest)); }

    #[inline]
    fn draw(&mut self, d: Draw) {
        self.push(d);
    }
}
