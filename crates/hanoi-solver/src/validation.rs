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

//! Replay-based checking of move sequences. The sequence is played back on
//! three fresh towers, `A` holding disks `n..=1`, and every move is checked
//! against the puzzle rules before it is applied: the source tower must hold
//! a disk, the move must name the disk actually on top, and that disk must
//! not land on a smaller one. After the last move all `n` disks have to sit
//! on tower `C`. Because no illegal placement is ever applied, a full tower
//! `C` is necessarily in canonical order.
//!
//! This is a diagnostic for tests and the suite's verification mode. It
//! checks legality and completeness, not minimality.

use hanoi_core::{
    moves::Move,
    stack::StackError,
    tower::{Disk, Label, Tower},
};
use thiserror::Error;

/// Why a move sequence was rejected. Steps are counted from 1.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("step {step}: tower {from} is empty")]
    EmptySource { step: u64, from: Label },
    #[error("step {step}: move names disk {claimed}, but disk {actual} is on top of tower {from}")]
    DiskMismatch {
        step: u64,
        from: Label,
        claimed: Disk,
        actual: Disk,
    },
    #[error("step {step}: disk {disk} placed on smaller disk {below} at tower {to}")]
    LargerOnSmaller {
        step: u64,
        disk: Disk,
        below: Disk,
        to: Label,
    },
    #[error("step {step}: disk {disk} moved from tower {label} onto itself")]
    SameTower { step: u64, disk: Disk, label: Label },
    #[error("sequence ended with {on_destination} of {disks} disks on tower C")]
    Incomplete { disks: u32, on_destination: usize },
    #[error("replay towers: {0}")]
    Stack(#[from] StackError),
}

#[inline(always)]
fn slot(label: Label) -> usize {
    match label {
        Label::A => 0,
        Label::B => 1,
        Label::C => 2,
    }
}

/// Replays `moves` for a puzzle of `disks` disks and checks every move and
/// the final arrangement.
pub fn replay(disks: u32, moves: &[Move]) -> Result<(), ReplayError> {
    let capacity = disks as usize;
    let mut towers = [
        Tower::with_disks(Label::A, disks)?,
        Tower::new(Label::B, capacity),
        Tower::new(Label::C, capacity),
    ];

    for (index, m) in moves.iter().enumerate() {
        let step = index as u64 + 1;
        let (from, to) = (slot(m.from), slot(m.to));

        if from == to {
            return Err(ReplayError::SameTower {
                step,
                disk: m.disk,
                label: m.from,
            });
        }

        let actual = towers[from]
            .top()
            .map_err(|_| ReplayError::EmptySource { step, from: m.from })?;
        if actual != m.disk {
            return Err(ReplayError::DiskMismatch {
                step,
                from: m.from,
                claimed: m.disk,
                actual,
            });
        }

        if let Ok(below) = towers[to].top() {
            if below < actual {
                return Err(ReplayError::LargerOnSmaller {
                    step,
                    disk: actual,
                    below,
                    to: m.to,
                });
            }
        }

        let disk = towers[from].pop()?;
        towers[to].push(disk)?;
    }

    let on_destination = towers[slot(Label::C)].len();
    if on_destination != capacity {
        return Err(ReplayError::Incomplete {
            disks,
            on_destination,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{iterative::IterativeSolver, recursive::RecursiveSolver, solver::HanoiSolver};
    use hanoi_core::sink::MoveLog;

    fn mv(disk: u32, from: Label, to: Label) -> Move {
        Move::new(Disk::new(disk), from, to)
    }

    fn moves_of<S: HanoiSolver>(mut solver: S, disks: u32) -> Vec<Move> {
        let mut log = MoveLog::new();
        solver.solve(disks, &mut log).unwrap();
        log.into_moves()
    }

    #[test]
    fn test_solver_sequences_replay_cleanly() {
        for disks in 1..=12u32 {
            assert_eq!(replay(disks, &moves_of(RecursiveSolver::new(), disks)), Ok(()));
            assert_eq!(replay(disks, &moves_of(IterativeSolver::new(), disks)), Ok(()));
        }
    }

    #[test]
    fn test_zero_disks_with_no_moves_is_complete() {
        assert_eq!(replay(0, &[]), Ok(()));
    }

    #[test]
    fn test_empty_source_is_rejected() {
        let moves = [mv(1, Label::A, Label::B), mv(1, Label::C, Label::A)];
        assert_eq!(
            replay(1, &moves),
            Err(ReplayError::EmptySource {
                step: 2,
                from: Label::C
            })
        );
    }

    #[test]
    fn test_wrong_disk_is_rejected() {
        let moves = [mv(2, Label::A, Label::C)];
        assert_eq!(
            replay(2, &moves),
            Err(ReplayError::DiskMismatch {
                step: 1,
                from: Label::A,
                claimed: Disk::new(2),
                actual: Disk::new(1),
            })
        );
    }

    #[test]
    fn test_larger_on_smaller_is_rejected() {
        let moves = [mv(1, Label::A, Label::C), mv(2, Label::A, Label::C)];
        assert_eq!(
            replay(2, &moves),
            Err(ReplayError::LargerOnSmaller {
                step: 2,
                disk: Disk::new(2),
                below: Disk::new(1),
                to: Label::C,
            })
        );
    }

    #[test]
    fn test_same_tower_is_rejected() {
        let moves = [mv(1, Label::A, Label::A)];
        assert!(matches!(
            replay(1, &moves),
            Err(ReplayError::SameTower { step: 1, .. })
        ));
    }

    #[test]
    fn test_stopping_short_is_incomplete() {
        let moves = [mv(1, Label::A, Label::B), mv(2, Label::A, Label::C)];
        assert_eq!(
            replay(2, &moves),
            Err(ReplayError::Incomplete {
                disks: 2,
                on_destination: 1
            })
        );
    }

    #[test]
    fn test_ending_on_wrong_tower_is_incomplete() {
        let moves = [mv(1, Label::A, Label::B)];
        assert_eq!(
            replay(1, &moves),
            Err(ReplayError::Incomplete {
                disks: 1,
                on_destination: 0
            })
        );
    }

    #[test]
    fn test_error_messages_mention_step() {
        let err = ReplayError::EmptySource {
            step: 4,
            from: Label::B,
        };
        assert_eq!(err.to_string(), "step 4: tower B is empty");
    }
}
