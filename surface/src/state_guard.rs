use crate::context::*;

use std::ops::{Deref, DerefMut};

///
/// Keeps a pushed state on a graphics context, popping it again when dropped
///
/// Everything done through the guard happens inside the pushed state, and the matching `pop_state()`
/// is sent on every exit path (including early returns and `?`).
///
pub struct StateGuard<'a, Gc>
where
    Gc: 'a + ?Sized + GraphicsContext,
{
    gc: &'a mut Gc,
}

impl<'a, Gc> StateGuard<'a, Gc>
where
    Gc: 'a + ?Sized + GraphicsContext,
{
    ///
    /// Pushes the state of a graphics context, returning a guard that will pop it again
    ///
    pub fn new(gc: &'a mut Gc) -> StateGuard<'a, Gc> {
        gc.push_state();

        StateGuard { gc }
    }
}

impl<'a, Gc> Deref for StateGuard<'a, Gc>
where
    Gc: 'a + ?Sized + GraphicsContext,
{
    type Target = Gc;

    #[inline]
    fn deref(&self) -> &Gc {
        self.gc
    }
}

impl<'a, Gc> DerefMut for StateGuard<'a, Gc>
where
    Gc: 'a + ?Sized + GraphicsContext,
{
    #[inline]
    fn deref_mut(&mut self) -> &mut Gc {
        self.gc
    }
}

impl<'a, Gc> Drop for StateGuard<'a, Gc>
where
    Gc: 'a + ?Sized + GraphicsContext,
{
    fn drop(&mut self) {
        self.gc.pop_state();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::draw::*;
    use crate::primitives::*;

    #[test]
    fn guard_pops_state_when_dropped() {
        let mut drawing: Vec<Draw> = vec![];

        {
            let mut gc = StateGuard::new(&mut drawing);
            gc.translate(1.0, 2.0);
        }

        assert!(drawing == vec![Draw::PushState, Draw::Translate(1.0, 2.0), Draw::PopState]);
    }

    #[test]
    fn guard_pops_state_on_early_return() {
        fn draw_until_error(gc: &mut Vec<Draw>) -> Result<(), ()> {
            let mut gc = gc.state_guard();
            gc.scale(2.0, 2.0);

            let failed: Result<(), ()> = Err(());
            failed?;

            gc.scale(3.0, 3.0);
            Ok(())
        }

        let mut drawing: Vec<Draw> = vec![];
        assert!(draw_until_error(&mut drawing).is_err());

        assert!(drawing == vec![Draw::PushState, Draw::Scale(2.0, 2.0), Draw::PopState]);
    }

    #[test]
    fn nested_guards_pop_in_order() {
        let mut drawing: Vec<Draw> = vec![];

        {
            let mut outer = drawing.state_guard();
            outer.rotate(1.0);

            {
                let mut inner = outer.state_guard();
                inner.rotate(2.0);
            }
        }

        assert!(drawing == vec![
            Draw::PushState,
            Draw::Rotate(1.0),
            Draw::PushState,
            Draw::Rotate(2.0),
            Draw::PopState,
            Draw::PopState,
        ]);
    }
}
