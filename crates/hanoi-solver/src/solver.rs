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

//! Solver interface
//!
//! Both algorithms implement `HanoiSolver` so the suite driver can time and
//! record them uniformly. Moves are reported through a `&mut dyn MoveSink`;
//! a solver never keeps them.

use crate::{error::SolveError, stats::Algorithm};
use hanoi_core::sink::MoveSink;

/// A Towers of Hanoi solver that moves `disks` disks from tower `A` to
/// tower `C`, reporting each move to a sink.
pub trait HanoiSolver {
    /// Returns the algorithm this solver implements.
    fn algorithm(&self) -> Algorithm;

    /// Returns the name of the solver.
    fn name(&self) -> &str {
        self.algorithm().as_str()
    }

    /// Solves the puzzle for `disks` disks. Zero disks is a no-op.
    fn solve(&mut self, disks: u32, sink: &mut dyn MoveSink) -> Result<(), SolveError>;
}

impl std::fmt::Debug for dyn HanoiSolver + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HanoiSolver({})", self.name())
    }
}

impl std::fmt::Display for dyn HanoiSolver + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HanoiSolver({})", self.name())
    }
}
