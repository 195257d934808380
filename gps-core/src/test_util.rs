//! Shared test doubles for the async paths.

extern crate std;

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};
use std::vec::Vec;

use crate::source::{ByteSource, SourceError};

/// Byte source that replays a script of read outcomes, then reads empty.
pub struct ScriptedSource {
    script: Vec<Result<Vec<u8>, SourceError>>,
    index: usize,
    delays: usize,
}

impl ScriptedSource {
    pub fn new(script: Vec<Result<Vec<u8>, SourceError>>) -> Self {
        Self {
            script,
            index: 0,
            delays: 0,
        }
    }

    /// Script entries not yet consumed.
    pub fn chunks_remaining(&self) -> usize {
        self.script.len() - self.index
    }

    /// Number of retry pauses requested so far.
    pub fn delays(&self) -> usize {
        self.delays
    }
}

impl ByteSource for ScriptedSource {
    fn read(&mut self, buf: &mut [u8]) -> impl Future<Output = Result<usize, SourceError>> {
        let result = if self.index < self.script.len() {
            let entry = self.script[self.index].clone();
            self.index += 1;
            match entry {
                Ok(data) => {
                    let n = data.len().min(buf.len());
                    buf[..n].copy_from_slice(&data[..n]);
                    Ok(n)
                }
                Err(e) => Err(e),
            }
        } else {
            Ok(0)
        };
        core::future::ready(result)
    }

    fn retry_delay(&mut self) -> impl Future<Output = ()> {
        self.delays += 1;
        core::future::ready(())
    }
}

/// Run a future to completion (simple blocking executor).
///
/// Test futures are always immediately ready; `Pending` is a bug.
pub fn block_on<F: Future>(mut f: F) -> F::Output {
    fn noop_raw_waker() -> RawWaker {
        fn noop(_: *const ()) {}
        fn clone(_: *const ()) -> RawWaker {
            noop_raw_waker()
        }
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, noop, noop, noop);
        RawWaker::new(core::ptr::null(), &VTABLE)
    }

    let waker = unsafe { Waker::from_raw(noop_raw_waker()) };
    let mut cx = Context::from_waker(&waker);

    // SAFETY: We don't move f after pinning
    let mut f = unsafe { Pin::new_unchecked(&mut f) };

    loop {
        match f.as_mut().poll(&mut cx) {
            Poll::Ready(result) => return result,
            Poll::Pending => {
                panic!("test future returned Pending unexpectedly");
            }
        }
    }
}
