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

//! `hanoi`: solves the Towers of Hanoi for every size from 1 up to the size
//! named in an input file, with the recursive and the iterative solver, and
//! writes every move plus the runtime of every run to a report file.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use hanoi_cli::{config::ProblemSizeLoader, report::ReportWriter};
use hanoi_solver::{stats::Algorithm, suite::SuiteBuilder};
use std::{fs::OpenOptions, io::BufWriter, path::PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hanoi", version, about = "Towers of Hanoi move logs and timings")]
struct Args {
    /// File whose first integer is the largest number of disks to solve.
    input: PathBuf,

    /// Report file that receives every move and the runtime of every run.
    output: PathBuf,

    /// Which solvers to run. `both` runs the recursive one first.
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Both)]
    algorithm: AlgorithmArg,

    /// Append to the report instead of overwriting it.
    #[arg(long)]
    append: bool,

    /// Replay every run's moves against the puzzle rules. Logging the moves
    /// for the replay is part of the reported runtime.
    #[arg(long)]
    verify: bool,

    /// Also print the report to stdout.
    #[arg(long)]
    echo: bool,

    /// Log solver progress at debug level.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    Recursive,
    Iterative,
    Both,
}

impl AlgorithmArg {
    fn algorithms(self) -> &'static [Algorithm] {
        match self {
            AlgorithmArg::Recursive => &[Algorithm::Recursive],
            AlgorithmArg::Iterative => &[Algorithm::Iterative],
            AlgorithmArg::Both => &Algorithm::ALL,
        }
    }
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let directive = if verbose { "hanoi=debug" } else { "hanoi=info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let max_disks = ProblemSizeLoader::new()
        .from_path(&args.input)
        .with_context(|| format!("failed to read problem size from {}", args.input.display()))?;
    info!(max_disks, input = %args.input.display(), "loaded problem size");

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(args.append)
        .truncate(!args.append)
        .open(&args.output)
        .with_context(|| format!("failed to open report {}", args.output.display()))?;
    let mut report = ReportWriter::new(BufWriter::new(file)).echo(args.echo);

    let algorithms = args.algorithm.algorithms();
    let mut suite = SuiteBuilder::new()
        .max_disks(max_disks)
        .algorithms(algorithms.iter().copied())
        .verify(args.verify)
        .build();
    suite
        .run_reporting(&mut report)
        .context("solver run failed")?;

    for &algorithm in algorithms {
        let history = report.history();
        info!(
            algorithm = algorithm.as_str(),
            runs = history.runs_for(algorithm).count(),
            moves = history.total_moves(algorithm),
            elapsed = ?history.total_elapsed(algorithm),
            "algorithm summary"
        );
    }

    report
        .finish()
        .with_context(|| format!("failed to write report {}", args.output.display()))?;
    Ok(())
}
