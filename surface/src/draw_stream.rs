use crate::draw::*;

use ::desync::*;
use futures::prelude::*;
use futures::task::{Context, Poll, Waker};

use std::pin::*;
use std::sync::*;
use std::collections::VecDeque;

///
/// The draw stream core contains the shared data structures for a stream of drawing instructions
///
pub (crate) struct DrawStreamCore {
    /// The pending drawing instructions
    pending_drawing: VecDeque<Draw>,

    /// The task waiting for the next instruction to arrive
    waiting_task: Option<Waker>,

    /// The number of targets that are writing to this stream
    usage_count: usize,

    /// Set to true once nothing else will be written to this stream
    closed: bool,

    /// Set to true once the stream has been dropped: nothing can read from the core after this
    reader_dropped: bool,
}

///
/// A draw stream relays `Draw` instructions from a source such as a `DrawingTarget` as a stream
///
pub struct DrawStream {
    /// The core of this draw stream
    core: Arc<Desync<DrawStreamCore>>
}

impl DrawStreamCore {
    ///
    /// Creates a new stream core
    ///
    pub fn new() -> DrawStreamCore {
        DrawStreamCore {
            pending_drawing:    VecDeque::new(),
            waiting_task:       None,
            usage_count:        0,
            closed:             false,
            reader_dropped:     false,
        }
    }

    ///
    /// Writes a stream of instructions to this drawing stream
    ///
    /// Instructions written after the stream has been dropped are discarded
    ///
    pub fn write<DrawIter: Iterator<Item=Draw>>(&mut self, drawing: DrawIter) {
        if !self.reader_dropped {
            self.pending_drawing.extend(drawing);
        }
    }

    ///
    /// Marks that the stream has gone away, discarding anything that was waiting to be read
    ///
    pub fn drop_reader(&mut self) {
        self.reader_dropped = true;
        self.waiting_task   = None;
        self.pending_drawing.clear();
    }

    ///
    /// The number of instructions waiting to be read
    ///
    #[cfg(test)]
    pub fn pending_count(&self) -> usize {
        self.pending_drawing.len()
    }

    ///
    /// Takes the waker for the task that's reading from the stream, if there is one
    ///
    pub fn take_waker(&mut self) -> Option<Waker> {
        self.waiting_task.take()
    }

    ///
    /// Adds a new writer of this stream
    ///
    pub fn add_usage(&mut self) {
        self.usage_count += 1;
    }

    ///
    /// Removes a writer of this stream, returning the number of writers that remain
    ///
    pub fn finish_usage(&mut self) -> usize {
        self.usage_count = self.usage_count.saturating_sub(1);
        self.usage_count
    }

    ///
    /// Marks that nothing more will be written to this stream
    ///
    pub fn close(&mut self) {
        self.closed = true;
    }
}

impl DrawStream {
    ///
    /// Creates a draw stream that reads from the specified core
    ///
    pub (crate) fn with_core(core: &Arc<Desync<DrawStreamCore>>) -> DrawStream {
        DrawStream {
            core: Arc::clone(core)
        }
    }
}

impl Drop for DrawStream {
    fn drop(&mut self) {
        self.core.sync(|core| core.drop_reader());
    }
}

impl Stream for DrawStream {
    type Item = Draw;

    fn poll_next(self: Pin<&mut Self>, context: &mut Context) -> Poll<Option<Draw>> {
        let waker = context.waker().clone();

        self.core.sync(move |core| {
            if let Some(next) = core.pending_drawing.pop_front() {
                // Instructions are waiting to be read
                Poll::Ready(Some(next))
            } else if core.closed {
                // All of the targets have finished
                Poll::Ready(None)
            } else {
                // Wait for more instructions to arrive
                core.waiting_task = Some(waker);
                Poll::Pending
            }
        })
    }
}
