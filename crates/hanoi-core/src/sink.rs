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

//! Move sinks
//!
//! Declares the `MoveSink` trait through which solvers report every move they
//! make, together with a handful of ready-made sinks. Solvers never store the
//! moves they produce; whatever needs the sequence (a log file, a counter, a
//! verifier) receives it through a sink.
//!
//! Behavior
//! - `record_move` is called once per move, in chronological order.
//! - `CompositeSink` forwards each move to its children in insertion order.
//! - Sinks take `&mut self`; they are assumed single-threaded.

use crate::{
    moves::Move,
    tower::{Disk, Label},
};

/// Receiver of the moves produced by a solver.
pub trait MoveSink {
    /// Called once for each move, in the order the moves are made.
    ///
    /// `disk` is a `Disk` rather than a bare `u32` so a sink never sees a
    /// size of zero; `u32::from(disk)` recovers the plain size.
    fn record_move(&mut self, disk: Disk, from: Label, to: Label);
}

impl<S> MoveSink for &mut S
where
    S: MoveSink + ?Sized,
{
    #[inline(always)]
    fn record_move(&mut self, disk: Disk, from: Label, to: Label) {
        (**self).record_move(disk, from, to);
    }
}

impl<S> MoveSink for Box<S>
where
    S: MoveSink + ?Sized,
{
    #[inline(always)]
    fn record_move(&mut self, disk: Disk, from: Label, to: Label) {
        (**self).record_move(disk, from, to);
    }
}

/// A sink that discards every move.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NoOpSink;

impl MoveSink for NoOpSink {
    #[inline(always)]
    fn record_move(&mut self, _disk: Disk, _from: Label, _to: Label) {}
}

/// A sink that only counts moves. The count saturates at `u64::MAX`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct MoveCounter {
    count: u64,
}

impl MoveCounter {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of moves recorded so far.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    #[inline]
    pub fn reset(&mut self) {
        self.count = 0;
    }
}

impl MoveSink for MoveCounter {
    #[inline(always)]
    fn record_move(&mut self, _disk: Disk, _from: Label, _to: Label) {
        self.count = self.count.saturating_add(1);
    }
}

/// A sink that keeps every move in order.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct MoveLog {
    moves: Vec<Move>,
}

impl MoveLog {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a log with room for `capacity` moves.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            moves: Vec::with_capacity(capacity),
        }
    }

    /// Returns the recorded moves in chronological order.
    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn into_moves(self) -> Vec<Move> {
        self.moves
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.moves.clear();
    }
}

impl MoveSink for MoveLog {
    #[inline]
    fn record_move(&mut self, disk: Disk, from: Label, to: Label) {
        self.moves.push(Move::new(disk, from, to));
    }
}

/// A sink that forwards every move to all of its children.
pub struct CompositeSink<'a> {
    sinks: Vec<Box<dyn MoveSink + 'a>>,
}

impl Default for CompositeSink<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CompositeSink<'a> {
    /// Creates a new empty `CompositeSink`.
    #[inline]
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Creates a new `CompositeSink` with room for `capacity` children.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sinks: Vec::with_capacity(capacity),
        }
    }

    /// Adds a child sink. Children receive moves in insertion order.
    #[inline]
    pub fn add_sink<S>(&mut self, sink: S)
    where
        S: MoveSink + 'a,
    {
        self.sinks.push(Box::new(sink));
    }

    /// Adds an already boxed child sink.
    #[inline]
    pub fn add_sink_boxed(&mut self, sink: Box<dyn MoveSink + 'a>) {
        self.sinks.push(sink);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.sinks.clear();
    }
}

impl MoveSink for CompositeSink<'_> {
    fn record_move(&mut self, disk: Disk, from: Label, to: Label) {
        for sink in self.sinks.iter_mut() {
            sink.record_move(disk, from, to);
        }
    }
}

impl std::fmt::Debug for CompositeSink<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CompositeSink(sinks: {})", self.sinks.len())
    }
}
