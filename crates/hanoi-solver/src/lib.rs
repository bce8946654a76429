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

//! # Hanoi Solver
//!
//! Two independent solvers for the three-tower Towers of Hanoi puzzle and the
//! machinery to time and compare them.
//!
//! Core flow
//! - Pick a `solver::HanoiSolver`: `recursive::RecursiveSolver` or
//!   `iterative::IterativeSolver`. Both emit the same canonical sequence of
//!   `2^n - 1` moves from tower `A` to tower `C`.
//! - Hand it a `hanoi_core::sink::MoveSink` to receive the moves.
//! - Or configure a `suite::Suite` to run several solvers over sizes `1..=N`,
//!   collecting one `stats::RunStats` per run.
//!
//! Guarantees
//! - Solvers are synchronous and own their towers for the duration of one
//!   call; nothing is shared between invocations.
//! - Tower failures inside a solver are logic errors and surface as
//!   `error::SolveError` instead of being swallowed.
//!
//! Module map
//! - `recursive`: divide-and-conquer solver.
//! - `iterative`: bounded-stack solver with the `j mod 3` pair rotation.
//! - `solver`: the `HanoiSolver` trait.
//! - `stats`: `Algorithm`, `RunStats`, `StatsCollector`, `RunHistory`.
//! - `suite`: timed driver over problem sizes, with a builder.
//! - `validation`: replay of move sequences against the puzzle rules.
//! - `error`: `SolveError`.

pub mod error;
pub mod iterative;
pub mod recursive;
pub mod solver;
pub mod stats;
pub mod suite;
pub mod validation;
