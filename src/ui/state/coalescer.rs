// SPDX-License-Identifier: MPL-2.0
//! Per-frame update coalescing.
//!
//! High-frequency inputs (pointer moves during a drag) overwrite a single
//! pending slot; the frame subscription drains it at most once per frame.

/// Holds at most one pending value; later submissions replace earlier ones.
#[derive(Debug, Clone)]
pub struct FrameCoalescer<T> {
    pending: Option<T>,
}

impl<T> Default for FrameCoalescer<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> FrameCoalescer<T> {
    /// Stores `value`, discarding any value not yet committed.
    pub fn submit(&mut self, value: T) {
        self.pending = Some(value);
    }

    /// Whether a frame tick is needed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Takes the pending value on a frame tick.
    pub fn commit(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Takes the pending value at gesture end, replacing it with `last`
    /// when the final sample is known.
    pub fn flush(&mut self, last: Option<T>) -> Option<T> {
        let pending = self.pending.take();
        last.or(pending)
    }

    /// Drops the pending value without committing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
