use crate::draw::*;
use crate::context::*;
use crate::state_guard::*;

///
/// GraphicsPrimitives adds new primitives that can be built directly from a graphics context
///
pub trait GraphicsPrimitives : GraphicsContext {
    ///
    /// Pushes the state of this context, returning a guard that pops it again when it's dropped
    ///
    fn state_guard(&mut self) -> StateGuard<'_, Self> {
        StateGuard::new(self)
    }

    ///
    /// Draws a series of instructions
    ///
    fn draw_list<'a>(&'a mut self, drawing: impl 'a + IntoIterator<Item=Draw>) {
        for d in drawing.into_iter() {
            self.draw(d);
        }
    }
}

///
/// All graphics contexts provide graphics primitives
///
impl<T> GraphicsPrimitives for T
where T: GraphicsContext {

}

///
/// The dynamic graphics context object also implements the graphics primitives
///
impl<'a> GraphicsPrimitives for dyn 'a+GraphicsContext {

}
