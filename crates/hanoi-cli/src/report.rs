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

//! Flat text report.
//!
//! Every move becomes one line, and every run is followed by a statistics
//! block:
//!
//! ```raw
//!
//! Move disk 1 from tower A to tower C
//! Number of rings: 1
//! Solution type: Recursive
//! Runtime: 0ms
//!
//! -----------------------------
//! ```
//!
//! Each entry starts with a newline rather than ending with one, so appending
//! to an existing report continues it seamlessly.

use hanoi_core::{
    moves::Move,
    sink::MoveSink,
    tower::{Disk, Label},
};
use hanoi_solver::stats::{RunHistory, RunStats, StatsCollector};
use std::io::{self, Write};

/// Writes moves and run statistics to `W`, optionally mirroring them to
/// stdout, and keeps the statistics for a final summary.
///
/// Neither `MoveSink` nor `StatsCollector` can fail, so the first write error
/// is kept, all later output is skipped, and the error is returned from
/// `finish`.
#[derive(Debug)]
pub struct ReportWriter<W: Write> {
    out: W,
    echo: bool,
    history: RunHistory,
    error: Option<io::Error>,
}

impl<W: Write> ReportWriter<W> {
    #[inline]
    pub fn new(out: W) -> Self {
        Self {
            out,
            echo: false,
            history: RunHistory::new(),
            error: None,
        }
    }

    /// Also prints everything written to stdout.
    #[inline]
    pub fn echo(mut self, yes: bool) -> Self {
        self.echo = yes;
        self
    }

    /// Returns the statistics recorded so far.
    #[inline]
    pub fn history(&self) -> &RunHistory {
        &self.history
    }

    /// Flushes the report and returns the underlying writer, or the first
    /// error encountered while writing.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn emit(&mut self, args: std::fmt::Arguments<'_>) {
        if self.echo {
            print!("{}", args);
        }
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.out.write_fmt(args) {
            self.error = Some(e);
        }
    }
}

impl<W: Write> MoveSink for ReportWriter<W> {
    fn record_move(&mut self, disk: Disk, from: Label, to: Label) {
        self.emit(format_args!("\n{}", Move::new(disk, from, to)));
    }
}

impl<W: Write> StatsCollector for ReportWriter<W> {
    fn record_run(&mut self, stats: RunStats) {
        self.emit(format_args!(
            "\nNumber of rings: {}\nSolution type: {}\nRuntime: {}ms\n\n{}\n",
            stats.problem_size,
            stats.algorithm,
            stats.elapsed.as_millis(),
            "-".repeat(29)
        ));
        self.history.record_run(stats);
    }
}
