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

//! # Benchmark Suite
//!
//! Drives one or more solvers over the problem sizes `1..=max_disks`, timing
//! every invocation and reporting both the moves and the per-run statistics.
//!
//! ## Highlights
//!
//! - Solvers run in insertion order; each solver goes through all problem
//!   sizes before the next one starts. By default the recursive solver runs
//!   first, then the iterative one.
//! - Every invocation gets fresh towers; nothing is shared between runs.
//! - The elapsed time covers the solver and the caller's sink, measured with
//!   `Instant`. Counting and verification bookkeeping is included as well.
//! - With verification enabled each run's moves are replayed against the
//!   puzzle rules after the timer stops.
//! - The first error aborts the suite. Runs completed before it stay recorded
//!   in the collector.
//!
//! ## Usage
//!
//! ```rust
//! use hanoi_core::sink::MoveCounter;
//! use hanoi_solver::{stats::RunHistory, suite::SuiteBuilder};
//!
//! let mut suite = SuiteBuilder::new().max_disks(4).verify(true).build();
//! let mut moves = MoveCounter::new();
//! let mut history = RunHistory::new();
//! suite.run(&mut moves, &mut history).unwrap();
//!
//! assert_eq!(history.len(), 8);
//! assert_eq!(moves.count(), 2 * (1 + 3 + 7 + 15));
//! ```

use crate::{
    error::SolveError,
    iterative::IterativeSolver,
    recursive::RecursiveSolver,
    solver::HanoiSolver,
    stats::{Algorithm, RunStats, StatsCollector},
    validation::replay,
};
use hanoi_core::{
    sink::{CompositeSink, MoveCounter, MoveLog, MoveSink},
    tower::{Disk, Label},
};
use std::time::Instant;
use tracing::info;

impl Algorithm {
    /// Returns a fresh solver implementing this algorithm.
    pub fn solver<'a>(self) -> Box<dyn HanoiSolver + 'a> {
        match self {
            Algorithm::Recursive => Box::new(RecursiveSolver::new()),
            Algorithm::Iterative => Box::new(IterativeSolver::new()),
        }
    }
}

/// Runs a fixed list of solvers over a range of problem sizes.
pub struct Suite<'a> {
    solvers: Vec<Box<dyn HanoiSolver + 'a>>,
    max_disks: u32,
    verify: bool,
}

impl<'a> Suite<'a> {
    #[inline]
    pub fn max_disks(&self) -> u32 {
        self.max_disks
    }

    #[inline]
    pub fn verifies(&self) -> bool {
        self.verify
    }

    #[inline]
    pub fn solvers(&self) -> &[Box<dyn HanoiSolver + 'a>] {
        &self.solvers
    }

    /// Runs every solver for every problem size, forwarding moves to `sink`
    /// and one `RunStats` per invocation to `collector`.
    pub fn run<S, C>(&mut self, sink: &mut S, collector: &mut C) -> Result<(), SolveError>
    where
        S: MoveSink + ?Sized,
        C: StatsCollector + ?Sized,
    {
        self.run_reporting(&mut RunRecorder::new(sink, collector))
    }

    /// Like `run`, for a single target that receives both the moves and the
    /// statistics. Each run's statistics are recorded right after its moves.
    pub fn run_reporting<R>(&mut self, reporter: &mut R) -> Result<(), SolveError>
    where
        R: MoveSink + StatsCollector + ?Sized,
    {
        let verify = self.verify;
        for solver in self.solvers.iter_mut() {
            for disks in 1..=self.max_disks {
                let stats = run_once(solver.as_mut(), disks, &mut *reporter, verify)?;
                info!(
                    disks,
                    algorithm = stats.algorithm.as_str(),
                    moves = stats.moves,
                    elapsed = ?stats.elapsed,
                    "run finished"
                );
                reporter.record_run(stats);
            }
        }
        Ok(())
    }
}

/// Combines a separate move sink and statistics collector into one target.
#[derive(Debug)]
pub struct RunRecorder<S, C> {
    pub sink: S,
    pub collector: C,
}

impl<S, C> RunRecorder<S, C> {
    #[inline]
    pub fn new(sink: S, collector: C) -> Self {
        Self { sink, collector }
    }
}

impl<S, C> MoveSink for RunRecorder<S, C>
where
    S: MoveSink,
{
    #[inline(always)]
    fn record_move(&mut self, disk: Disk, from: Label, to: Label) {
        self.sink.record_move(disk, from, to);
    }
}

impl<S, C> StatsCollector for RunRecorder<S, C>
where
    C: StatsCollector,
{
    #[inline(always)]
    fn record_run(&mut self, stats: RunStats) {
        self.collector.record_run(stats);
    }
}

impl std::fmt::Debug for Suite<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Suite")
            .field("solvers", &self.solvers)
            .field("max_disks", &self.max_disks)
            .field("verify", &self.verify)
            .finish()
    }
}

/// Times a single solver invocation.
///
/// Moves go to `sink` and to an internal counter; with `verify` they are also
/// logged and replayed once the timer has stopped.
pub fn run_once<S>(
    solver: &mut (dyn HanoiSolver + '_),
    disks: u32,
    sink: &mut S,
    verify: bool,
) -> Result<RunStats, SolveError>
where
    S: MoveSink + ?Sized,
{
    let mut counter = MoveCounter::new();
    let mut log = verify.then(MoveLog::new);

    let start = Instant::now();
    {
        let mut fan_out = CompositeSink::with_capacity(3);
        fan_out.add_sink(&mut *sink);
        fan_out.add_sink(&mut counter);
        if let Some(log) = log.as_mut() {
            fan_out.add_sink(log);
        }
        solver.solve(disks, &mut fan_out)?;
    }
    let elapsed = start.elapsed();

    if let Some(log) = log {
        replay(disks, log.moves())?;
    }

    Ok(RunStats::new(
        disks,
        solver.algorithm(),
        elapsed,
        counter.count(),
    ))
}

/// Builder for `Suite`.
pub struct SuiteBuilder<'a> {
    solvers: Vec<Box<dyn HanoiSolver + 'a>>,
    max_disks: u32,
    verify: bool,
}

impl Default for SuiteBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> SuiteBuilder<'a> {
    /// Creates a builder with no solvers, `max_disks` of 0 and verification off.
    #[inline]
    pub fn new() -> Self {
        Self {
            solvers: Vec::new(),
            max_disks: 0,
            verify: false,
        }
    }

    /// Sets the largest problem size; sizes `1..=max_disks` are run.
    #[inline]
    pub fn max_disks(mut self, max_disks: u32) -> Self {
        self.max_disks = max_disks;
        self
    }

    /// Enables replay verification of every run.
    #[inline]
    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Appends a solver.
    #[inline]
    pub fn add_solver<H>(mut self, solver: H) -> Self
    where
        H: HanoiSolver + 'a,
    {
        self.solvers.push(Box::new(solver));
        self
    }

    /// Appends an already boxed solver.
    #[inline]
    pub fn add_solver_boxed(mut self, solver: Box<dyn HanoiSolver + 'a>) -> Self {
        self.solvers.push(solver);
        self
    }

    /// Appends one solver per algorithm, in iteration order.
    pub fn algorithms<I>(mut self, algorithms: I) -> Self
    where
        I: IntoIterator<Item = Algorithm>,
    {
        self.solvers
            .extend(algorithms.into_iter().map(Algorithm::solver));
        self
    }

    /// Builds the suite. Without any solver added, the recursive solver
    /// followed by the iterative solver is used.
    pub fn build(self) -> Suite<'a> {
        let solvers = if self.solvers.is_empty() {
            Algorithm::ALL.into_iter().map(Algorithm::solver).collect()
        } else {
            self.solvers
        };

        Suite {
            solvers,
            max_disks: self.max_disks,
            verify: self.verify,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{NoOpCollector, RunHistory};
    use hanoi_core::{moves::Move, sink::NoOpSink};

    /// Emits a single, illegal move regardless of the disk count.
    struct BrokenSolver;

    impl HanoiSolver for BrokenSolver {
        fn algorithm(&self) -> Algorithm {
            Algorithm::Iterative
        }

        fn solve(&mut self, _disks: u32, sink: &mut dyn MoveSink) -> Result<(), SolveError> {
            sink.record_move(Disk::new(1), Label::B, Label::C);
            Ok(())
        }
    }

    #[test]
    fn test_default_order_is_recursive_then_iterative() {
        let mut suite = SuiteBuilder::new().max_disks(3).build();
        let mut history = RunHistory::new();
        suite.run(&mut NoOpSink, &mut history).unwrap();

        let order: Vec<(Algorithm, u32)> = history
            .runs()
            .iter()
            .map(|r| (r.algorithm, r.problem_size))
            .collect();
        assert_eq!(
            order,
            vec![
                (Algorithm::Recursive, 1),
                (Algorithm::Recursive, 2),
                (Algorithm::Recursive, 3),
                (Algorithm::Iterative, 1),
                (Algorithm::Iterative, 2),
                (Algorithm::Iterative, 3),
            ]
        );
        assert!(history.runs().iter().all(|r| r.moves == (1u64 << r.problem_size) - 1));
    }

    #[test]
    fn test_moves_reach_the_callers_sink_in_order() {
        let mut suite = SuiteBuilder::new()
            .max_disks(2)
            .add_solver(IterativeSolver::new())
            .build();
        let mut log = MoveLog::new();
        suite.run(&mut log, &mut NoOpCollector).unwrap();

        let mv = |d, f, t| Move::new(Disk::new(d), f, t);
        assert_eq!(
            log.moves(),
            &[
                mv(1, Label::A, Label::C),
                mv(1, Label::A, Label::B),
                mv(2, Label::A, Label::C),
                mv(1, Label::B, Label::C),
            ]
        );
    }

    #[test]
    fn test_zero_max_disks_runs_nothing() {
        let mut suite = SuiteBuilder::new().max_disks(0).build();
        let mut history = RunHistory::new();
        let mut counter = MoveCounter::new();
        suite.run(&mut counter, &mut history).unwrap();
        assert!(history.is_empty());
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_algorithms_selects_solvers() {
        let suite = SuiteBuilder::new()
            .algorithms([Algorithm::Iterative])
            .max_disks(5)
            .verify(true)
            .build();
        assert_eq!(suite.solvers().len(), 1);
        assert_eq!(suite.solvers()[0].algorithm(), Algorithm::Iterative);
        assert_eq!(suite.max_disks(), 5);
        assert!(suite.verifies());
    }

    #[test]
    fn test_verification_rejects_illegal_sequence() {
        let mut suite = SuiteBuilder::new()
            .max_disks(2)
            .add_solver(BrokenSolver)
            .verify(true)
            .build();
        let mut history = RunHistory::new();
        let err = suite.run(&mut NoOpSink, &mut history).unwrap_err();
        assert!(matches!(err, SolveError::Replay(_)));
        assert!(history.is_empty());
    }

    #[test]
    fn test_without_verification_broken_runs_are_recorded() {
        let mut suite = SuiteBuilder::new()
            .max_disks(2)
            .add_solver_boxed(Box::new(BrokenSolver))
            .build();
        let mut history = RunHistory::new();
        suite.run(&mut NoOpSink, &mut history).unwrap();
        assert_eq!(history.len(), 2);
        assert!(history.runs().iter().all(|r| r.moves == 1));
    }

    #[test]
    fn test_run_reporting_interleaves_moves_and_stats() {
        #[derive(Default)]
        struct Trace {
            events: Vec<String>,
        }

        impl MoveSink for Trace {
            fn record_move(&mut self, disk: Disk, _from: Label, _to: Label) {
                self.events.push(format!("move {}", disk));
            }
        }

        impl StatsCollector for Trace {
            fn record_run(&mut self, stats: RunStats) {
                self.events.push(format!("run {}", stats.problem_size));
            }
        }

        let mut suite = SuiteBuilder::new()
            .max_disks(2)
            .add_solver(RecursiveSolver::new())
            .build();
        let mut trace = Trace::default();
        suite.run_reporting(&mut trace).unwrap();
        assert_eq!(
            trace.events,
            vec!["move 1", "run 1", "move 1", "move 2", "move 1", "run 2"]
        );
    }

    #[test]
    fn test_run_once_reports_algorithm_and_moves() {
        let mut solver = RecursiveSolver::new();
        let stats = run_once(&mut solver, 6, &mut NoOpSink, true).unwrap();
        assert_eq!(stats.algorithm, Algorithm::Recursive);
        assert_eq!(stats.problem_size, 6);
        assert_eq!(stats.moves, 63);
    }
}
