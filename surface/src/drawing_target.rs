use crate::draw::*;
use crate::draw_stream::*;

use ::desync::*;

use std::sync::*;

type DrawGraphicsContext = Vec<Draw>;

///
/// A drawing target sends drawing instructions to a `DrawStream`
///
/// Each call to `write()`, `draw()` or `try_draw()` is added to the stream as a single unit, so when several
/// threads share a target (by cloning it), a `PushState`/`PopState` pair sent by one of them can never be
/// interleaved with instructions from another.
///
pub struct DrawingTarget {
    /// The stream core is where drawing instructions will be sent to
    stream_core: Arc<Desync<DrawStreamCore>>,
}

impl DrawingTarget {
    ///
    /// Creates a new drawing target and a stream that can be used to read the instructions sent to it
    ///
    pub fn new() -> (DrawingTarget, DrawStream) {
        // Create the core
        let core    = Arc::new(Desync::new(DrawStreamCore::new()));
        core.desync(|core| core.add_usage());

        // Create the stream
        let stream  = DrawStream::with_core(&core);

        // Create the context
        let context = DrawingTarget {
            stream_core: core
        };

        (context, stream)
    }

    ///
    /// Sends some drawing instructions to this target
    ///
    pub fn write<Drawing: Send+IntoIterator<Item=Draw>>(&self, drawing: Drawing) {
        // Write the drawing instructions to the pending queue
        let waker = self.stream_core.sync(move |core| {
            core.write(drawing.into_iter());
            core.take_waker()
        });

        // Wake the stream, if anything is listening
        if let Some(waker) = waker { waker.wake(); }
    }

    ///
    /// Provides a way to draw on this target via a graphics context
    ///
    /// The instructions are sent as a single frame
    ///
    pub fn draw<FnAction>(&self, action: FnAction)
    where FnAction: FnOnce(&mut DrawGraphicsContext) -> () {
        // Fill a buffer with the drawing actions
        let mut draw_actions = vec![];
        action(&mut draw_actions);

        draw_actions.insert(0, Draw::StartFrame);
        draw_actions.push(Draw::ShowFrame);

        // Send the actions to the core
        self.write(draw_actions);
    }

    ///
    /// Draws on this target via a graphics context, sending the instructions as a single frame only if the action succeeds
    ///
    /// When the action returns an error, nothing it drew reaches the stream.
    ///
    pub fn try_draw<TResult, TError, FnAction>(&self, action: FnAction) -> Result<TResult, TError>
    where FnAction: FnOnce(&mut DrawGraphicsContext) -> Result<TResult, TError> {
        let mut draw_actions = vec![];
        let result = action(&mut draw_actions)?;

        draw_actions.insert(0, Draw::StartFrame);
        draw_actions.push(Draw::ShowFrame);

        self.write(draw_actions);

        Ok(result)
    }
}

///
/// A drawing target can be cloned in order to create multiple sources for a single stream
///
impl Clone for DrawingTarget {
    fn clone(&self) -> DrawingTarget {
        let new_core = Arc::clone(&self.stream_core);
        new_core.desync(|core| core.add_usage());
        DrawingTarget {
            stream_core: new_core
        }
    }
}

impl Drop for DrawingTarget {
    fn drop(&mut self) {
        let waker = self.stream_core.sync(|core| {
            if core.finish_usage() == 0 {
                core.close();
                core.take_waker()
            } else {
                None
            }
        });

        if let Some(waker) = waker { waker.wake(); }
    }
}
