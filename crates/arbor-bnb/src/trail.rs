// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.


//! Frame-structured undo log.
//!
//! `UndoTrail<E>` records the mutations applied to a subproblem so they can be
//! reverted in LIFO order. Typical usage inside a problem instantiation:
//! 1. A transition calls `push_frame()` and then `push(entry)` for every
//!    element it changes.
//! 2. While the child is inspected, `current_frame()` exposes the undo record
//!    of the transition that produced it.
//! 3. The matching restoration calls `pop_frame()` and reverts every drained
//!    entry.
//!
//! Entries are stored linearly; `frames[i]` holds the index in `entries` at
//! which frame `i` begins. Popping a frame drains exactly the entries pushed
//! since the matching `push_frame`.

/// A linear undo log with frame markers for efficient restoration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UndoTrail<E> {
    /// The linear history of recorded changes.
    entries: Vec<E>,
    /// `frames[i]` stores the index in `entries` where frame `i` began.
    frames: Vec<usize>,
}

impl<E> Default for UndoTrail<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> UndoTrail<E> {
    /// Creates a new, empty `UndoTrail`.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Creates an `UndoTrail` with room for `entry_capacity` entries and
    /// `frame_capacity` frames.
    #[inline]
    pub fn preallocated(entry_capacity: usize, frame_capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(entry_capacity),
            frames: Vec::with_capacity(frame_capacity),
        }
    }

    /// Returns the number of recorded entries over all frames.
    #[inline]
    pub fn num_entries(&self) -> usize {
        self.entries.len()
    }

    /// Returns the number of open frames.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if no frame is open.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Opens a new frame.
    #[inline]
    pub fn push_frame(&mut self) {
        self.frames.push(self.entries.len());
    }

    /// Records an entry in the current frame.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if no frame is open.
    #[inline]
    pub fn push(&mut self, entry: E) {
        debug_assert!(
            !self.frames.is_empty(),
            "called `UndoTrail::push` without an open frame"
        );
        self.entries.push(entry);
    }

    /// Returns the entries of the current frame, oldest first. Empty if no
    /// frame is open.
    #[inline]
    pub fn current_frame(&self) -> &[E] {
        match self.frames.last() {
            Some(&start) => &self.entries[start..],
            None => &[],
        }
    }

    /// Closes the current frame and drains its entries, oldest first.
    /// Returns `None` if no frame is open.
    #[inline]
    pub fn pop_frame(&mut self) -> Option<std::vec::Drain<'_, E>> {
        let start = self.frames.pop()?;
        Some(self.entries.drain(start..))
    }

    /// Clears all entries and frames without reverting anything, keeping the
    /// allocated capacity.
    #[inline]
    pub fn reset(&mut self) {
        self.entries.clear();
        self.frames.clear();
    }

    /// Returns the total allocated memory in bytes.
    #[inline]
    pub fn allocated_memory_bytes(&self) -> usize {
        let entries_size = self.entries.capacity() * std::mem::size_of::<E>();
        let frames_size = self.frames.capacity() * std::mem::size_of::<usize>();
        entries_size + frames_size
    }
}

impl<E> std::fmt::Display for UndoTrail<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "UndoTrail(entries: {}, frames: {})",
            self.entries.len(),
            self.frames.len()
        )
    }
}
