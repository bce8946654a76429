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

use std::time::Duration;

/// The algorithm a run was produced by.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Algorithm {
    Recursive,
    Iterative,
}

impl Algorithm {
    /// Both algorithms, in the order the suite runs them by default.
    pub const ALL: [Algorithm; 2] = [Algorithm::Recursive, Algorithm::Iterative];

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Recursive => "Recursive",
            Algorithm::Iterative => "Iterative",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timing and size of a single solver invocation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RunStats {
    /// Number of disks solved.
    pub problem_size: u32,
    /// Algorithm that produced the run.
    pub algorithm: Algorithm,
    /// Wall-clock time of the invocation, including time spent in the sink.
    pub elapsed: Duration,
    /// Number of moves emitted.
    pub moves: u64,
}

impl RunStats {
    #[inline]
    pub fn new(problem_size: u32, algorithm: Algorithm, elapsed: Duration, moves: u64) -> Self {
        Self {
            problem_size,
            algorithm,
            elapsed,
            moves,
        }
    }
}

impl std::fmt::Display for RunStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(disks: {}, moves: {}, elapsed: {:.2?})",
            self.algorithm, self.problem_size, self.moves, self.elapsed
        )
    }
}

/// Receiver of per-run statistics. Called once per solver invocation.
pub trait StatsCollector {
    fn record_run(&mut self, stats: RunStats);
}

impl<C> StatsCollector for &mut C
where
    C: StatsCollector + ?Sized,
{
    #[inline(always)]
    fn record_run(&mut self, stats: RunStats) {
        (**self).record_run(stats);
    }
}

/// A collector that discards every run.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NoOpCollector;

impl StatsCollector for NoOpCollector {
    #[inline(always)]
    fn record_run(&mut self, _stats: RunStats) {}
}

/// All recorded runs, in the order they were recorded.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct RunHistory {
    runs: Vec<RunStats>,
}

impl RunHistory {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn runs(&self) -> &[RunStats] {
        &self.runs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Returns the runs of one algorithm, in recording order.
    pub fn runs_for(&self, algorithm: Algorithm) -> impl Iterator<Item = &RunStats> + '_ {
        self.runs.iter().filter(move |r| r.algorithm == algorithm)
    }

    /// Sum of the elapsed times of all runs of `algorithm`.
    pub fn total_elapsed(&self, algorithm: Algorithm) -> Duration {
        self.runs_for(algorithm).map(|r| r.elapsed).sum()
    }

    /// Sum of the moves of all runs of `algorithm`. Saturates at `u64::MAX`.
    pub fn total_moves(&self, algorithm: Algorithm) -> u64 {
        self.runs_for(algorithm)
            .fold(0u64, |acc, r| acc.saturating_add(r.moves))
    }

    /// The slowest run of `algorithm`, if any. Ties go to the later run.
    pub fn slowest(&self, algorithm: Algorithm) -> Option<&RunStats> {
        self.runs_for(algorithm).max_by_key(|r| r.elapsed)
    }
}

impl StatsCollector for RunHistory {
    #[inline]
    fn record_run(&mut self, stats: RunStats) {
        self.runs.push(stats);
    }
}

impl std::fmt::Display for RunHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{:<10} | {:<6} | {:<20} | {:<12}",
            "Algorithm", "Disks", "Moves", "Elapsed"
        )?;
        writeln!(f, "{}", "-".repeat(57))?;
        for run in &self.runs {
            writeln!(
                f,
                "{:<10} | {:<6} | {:<20} | {:<12}",
                run.algorithm.as_str(),
                run.problem_size,
                run.moves,
                format!("{:.2?}", run.elapsed)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(n: u32, algorithm: Algorithm, millis: u64) -> RunStats {
        RunStats::new(
            n,
            algorithm,
            Duration::from_millis(millis),
            (1u64 << n) - 1,
        )
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!(Algorithm::Recursive.to_string(), "Recursive");
        assert_eq!(Algorithm::Iterative.to_string(), "Iterative");
        assert_eq!(
            Algorithm::ALL,
            [Algorithm::Recursive, Algorithm::Iterative]
        );
    }

    #[test]
    fn test_history_keeps_order_and_aggregates() {
        let mut history = RunHistory::new();
        assert!(history.is_empty());

        history.record_run(run(1, Algorithm::Recursive, 2));
        history.record_run(run(2, Algorithm::Recursive, 5));
        history.record_run(run(1, Algorithm::Iterative, 1));
        history.record_run(run(2, Algorithm::Iterative, 3));

        assert_eq!(history.len(), 4);
        assert_eq!(history.runs()[2].algorithm, Algorithm::Iterative);
        assert_eq!(
            history.total_elapsed(Algorithm::Recursive),
            Duration::from_millis(7)
        );
        assert_eq!(history.total_moves(Algorithm::Iterative), 4);
        assert_eq!(
            history.slowest(Algorithm::Recursive).map(|r| r.problem_size),
            Some(2)
        );
        assert_eq!(history.runs_for(Algorithm::Iterative).count(), 2);
    }

    #[test]
    fn test_empty_history_aggregates() {
        let history = RunHistory::new();
        assert_eq!(history.total_elapsed(Algorithm::Iterative), Duration::ZERO);
        assert_eq!(history.total_moves(Algorithm::Recursive), 0);
        assert!(history.slowest(Algorithm::Recursive).is_none());
    }

    #[test]
    fn test_collector_through_mutable_reference() {
        let mut history = RunHistory::new();
        {
            let mut by_ref = &mut history;
            StatsCollector::record_run(&mut by_ref, run(3, Algorithm::Recursive, 0));
        }
        NoOpCollector.record_run(run(3, Algorithm::Recursive, 0));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_display() {
        let stats = run(3, Algorithm::Iterative, 0);
        assert!(
            stats
                .to_string()
                .starts_with("Iterative(disks: 3, moves: 7, elapsed: ")
        );

        let mut history = RunHistory::new();
        history.record_run(stats);
        let rendered = history.to_string();
        assert!(rendered.starts_with("Algorithm"));
        assert!(rendered.contains("Iterative"));
        assert_eq!(rendered.lines().count(), 3);
    }
}
