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

//! Divide-and-conquer solver.
//!
//! Moving `n` disks from an origin to a destination is three steps: move the
//! top `n - 1` disks out of the way onto the auxiliary tower, move disk `n`,
//! then move the `n - 1` disks from the auxiliary tower onto disk `n`. The
//! recursion depth equals the number of disks, which is far below any native
//! stack limit for problem sizes whose `2^n - 1` moves can actually be
//! enumerated.

use crate::{error::SolveError, solver::HanoiSolver, stats::Algorithm};
use hanoi_core::{
    num::move_count,
    sink::MoveSink,
    tower::{Disk, Label},
};
use tracing::debug;

/// The classic recursive solver.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RecursiveSolver;

impl RecursiveSolver {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Emits the canonical `2^disks - 1` moves that transfer `disks` disks
    /// from `origin` to `destination` using `auxiliary` as scratch space.
    /// Zero disks emits nothing.
    pub fn solve_between<S>(
        disks: u32,
        origin: Label,
        auxiliary: Label,
        destination: Label,
        sink: &mut S,
    ) where
        S: MoveSink + ?Sized,
    {
        match disks {
            0 => {}
            1 => sink.record_move(Disk::new(1), origin, destination),
            n => {
                Self::solve_between(n - 1, origin, destination, auxiliary, sink);
                sink.record_move(Disk::new(n), origin, destination);
                Self::solve_between(n - 1, auxiliary, origin, destination, sink);
            }
        }
    }
}

impl HanoiSolver for RecursiveSolver {
    #[inline]
    fn algorithm(&self) -> Algorithm {
        Algorithm::Recursive
    }

    /// Returns `SolveError::MoveCountOverflow` for more than 64 disks before
    /// any move is made.
    fn solve(&mut self, disks: u32, sink: &mut dyn MoveSink) -> Result<(), SolveError> {
        move_count::<u64>(disks).ok_or(SolveError::MoveCountOverflow { disks })?;
        debug!(disks, "recursive solve started");
        Self::solve_between(disks, Label::A, Label::B, Label::C, sink);
        debug!(disks, "recursive solve finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanoi_core::{moves::Move, sink::MoveLog};

    fn mv(disk: u32, from: Label, to: Label) -> Move {
        Move::new(Disk::new(disk), from, to)
    }

    fn solve(disks: u32) -> Vec<Move> {
        let mut log = MoveLog::new();
        RecursiveSolver::new().solve(disks, &mut log).unwrap();
        log.into_moves()
    }

    #[test]
    fn test_zero_disks_is_a_no_op() {
        assert!(solve(0).is_empty());
    }

    #[test]
    fn test_one_disk() {
        assert_eq!(solve(1), vec![mv(1, Label::A, Label::C)]);
    }

    #[test]
    fn test_two_disks() {
        assert_eq!(
            solve(2),
            vec![
                mv(1, Label::A, Label::B),
                mv(2, Label::A, Label::C),
                mv(1, Label::B, Label::C),
            ]
        );
    }

    #[test]
    fn test_three_disks_canonical_sequence() {
        use Label::*;
        assert_eq!(
            solve(3),
            vec![
                mv(1, A, C),
                mv(2, A, B),
                mv(1, C, B),
                mv(3, A, C),
                mv(1, B, A),
                mv(2, B, C),
                mv(1, A, C),
            ]
        );
    }

    #[test]
    fn test_move_count_is_two_to_the_n_minus_one() {
        for disks in 1..=16u32 {
            assert_eq!(solve(disks).len() as u64, (1u64 << disks) - 1);
        }
    }

    #[test]
    fn test_custom_labels() {
        let mut log = MoveLog::new();
        RecursiveSolver::solve_between(2, Label::C, Label::A, Label::B, &mut log);
        assert_eq!(
            log.moves(),
            &[
                mv(1, Label::C, Label::A),
                mv(2, Label::C, Label::B),
                mv(1, Label::A, Label::B),
            ]
        );
    }

    #[test]
    fn test_largest_disk_moves_once_in_the_middle() {
        let moves = solve(5);
        let largest: Vec<usize> = moves
            .iter()
            .enumerate()
            .filter(|(_, m)| m.disk == Disk::new(5))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(largest, vec![15]);
    }

    #[test]
    fn test_too_many_disks_is_rejected_before_any_move() {
        let mut log = MoveLog::new();
        assert_eq!(
            RecursiveSolver::new().solve(65, &mut log),
            Err(SolveError::MoveCountOverflow { disks: 65 })
        );
        assert!(log.is_empty());
    }

    #[test]
    fn test_name() {
        let solver = RecursiveSolver::new();
        assert_eq!(solver.name(), "Recursive");
        let dynamic: &dyn HanoiSolver = &solver;
        assert_eq!(format!("{:?}", dynamic), "HanoiSolver(Recursive)");
    }
}
