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

//! Stack-driven iterative solver.
//!
//! Three `Tower`s of capacity `n` are set up with all disks on `A`. Step `j`
//! (for `j` in `1..=2^n - 1`) picks a pair of towers by `j mod 3` and makes
//! the only legal move between them: onto the empty tower if one is empty,
//! otherwise the smaller top disk onto the larger one.
//!
//! | `j mod 3` | pair                        |
//! |-----------|-----------------------------|
//! | 1         | (origin, destination)       |
//! | 2         | (origin, auxiliary)         |
//! | 0         | (auxiliary, destination)    |
//!
//! For odd `n` the auxiliary tower is `B` and the destination is `C`. For even
//! `n` the two labels are swapped. The pair rotation alone would park an even
//! tower on the wrong peg; the swap makes the sequence identical to the
//! recursive one, with every disk ending on `C` for both parities.

use crate::{error::SolveError, solver::HanoiSolver, stats::Algorithm};
use hanoi_core::{
    num::move_count,
    sink::MoveSink,
    stack::StackError,
    tower::{Disk, Label, Tower},
};
use tracing::{debug, trace};

/// The iterative solver backed by three bounded stacks.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct IterativeSolver;

impl IterativeSolver {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Emits the `2^disks - 1` moves that transfer `disks` disks from `A` to
    /// `C`. Zero disks emits nothing.
    ///
    /// A returned `SolveError::Stack` means the selection rule broke a tower
    /// invariant. `SolveError::MoveCountOverflow` is returned for more than
    /// 64 disks.
    pub fn solve_with<S>(disks: u32, sink: &mut S) -> Result<(), SolveError>
    where
        S: MoveSink + ?Sized,
    {
        let num_moves =
            move_count::<u64>(disks).ok_or(SolveError::MoveCountOverflow { disks })?;

        let (auxiliary_label, destination_label) = if disks % 2 == 0 {
            (Label::C, Label::B)
        } else {
            (Label::B, Label::C)
        };

        let capacity = disks as usize;
        let mut origin = Tower::with_disks(Label::A, disks)?;
        let mut auxiliary = Tower::new(auxiliary_label, capacity);
        let mut destination = Tower::new(destination_label, capacity);

        for step in 1..=num_moves {
            let (first, second) = match step % 3 {
                1 => (&mut origin, &mut destination),
                2 => (&mut origin, &mut auxiliary),
                _ => (&mut auxiliary, &mut destination),
            };
            let disk = exchange_top(first, second, sink)?;
            trace!(step, disk = disk.get(), "iterative step");
        }

        debug_assert!(origin.is_empty());
        debug_assert_eq!(
            if disks % 2 == 0 { auxiliary.len() } else { destination.len() },
            capacity
        );
        Ok(())
    }
}

/// Makes the single legal move between `first` and `second` and returns the
/// moved disk.
///
/// - `first` empty: the top of `second` moves onto `first`.
/// - `second` empty: the top of `first` moves onto `second`.
/// - otherwise the smaller top disk moves onto the other tower.
///
/// Fails with `StackError::Underflow` only if both towers are empty.
pub(crate) fn exchange_top<S>(
    first: &mut Tower,
    second: &mut Tower,
    sink: &mut S,
) -> Result<Disk, StackError>
where
    S: MoveSink + ?Sized,
{
    if first.is_empty() {
        return second.move_top_to(first, sink);
    }
    if second.is_empty() {
        return first.move_top_to(second, sink);
    }

    let first_top = first.top()?;
    let second_top = second.top()?;
    debug_assert_ne!(first_top, second_top, "disk sizes must be unique");

    if first_top < second_top {
        first.move_top_to(second, sink)
    } else {
        second.move_top_to(first, sink)
    }
}

impl HanoiSolver for IterativeSolver {
    #[inline]
    fn algorithm(&self) -> Algorithm {
        Algorithm::Iterative
    }

    fn solve(&mut self, disks: u32, sink: &mut dyn MoveSink) -> Result<(), SolveError> {
        debug!(disks, "iterative solve started");
        Self::solve_with(disks, sink)?;
        debug!(disks, "iterative solve finished");
        Ok(())
    }
}
