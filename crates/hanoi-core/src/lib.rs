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

//! # Hanoi Core
//!
//! Building blocks shared by the Towers of Hanoi solvers: a fixed-capacity
//! stack, labeled towers of disks, the move record, and the sink interface
//! through which solvers report their moves.
//!
//! ## Modules
//!
//! - `stack`: `BoundedStack<T>`, a LIFO container whose capacity is fixed at
//!   construction, with `StackError::{Overflow, Underflow}` instead of
//!   reallocation or panics.
//! - `tower`: `Disk` (a size), `Label` (`A`, `B`, `C`), and `Tower`, a labeled
//!   `BoundedStack<Disk>` that can hand its top disk to another tower.
//! - `moves`: the `Move` record and its log wording.
//! - `sink`: the `MoveSink` trait plus `MoveLog`, `MoveCounter`, `NoOpSink`,
//!   and `CompositeSink`.
//! - `num`: `move_count`, the checked `2^n - 1`.

pub mod moves;
pub mod num;
pub mod sink;
pub mod stack;
pub mod tower;
