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

use crate::validation::ReplayError;
use hanoi_core::stack::StackError;
use thiserror::Error;

/// Errors surfaced by the solvers and the suite driver.
///
/// For correctly sized towers none of these occur: a `Stack` error means the
/// move-selection rule or the disk bookkeeping is broken, and a `Replay`
/// error means a solver emitted an illegal sequence. Both are logic errors
/// and are not meant to be recovered from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// A tower operation failed while solving.
    #[error("tower invariant violated: {0}")]
    Stack(#[from] StackError),
    /// `2^disks - 1` does not fit into a `u64` step counter.
    #[error("move count for {disks} disks exceeds the 64-bit step counter")]
    MoveCountOverflow {
        /// The requested number of disks.
        disks: u32,
    },
    /// A verified run produced an illegal move sequence.
    #[error("move sequence rejected: {0}")]
    Replay(#[from] ReplayError),
}
