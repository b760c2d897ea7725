//! Sequence analysis harness.
//!
//! Drives any [`Generator`] for a fixed number of steps and records the
//! first repeated output, collapse to zero and the wall-clock time of the
//! whole run.

use std::collections::HashSet;
use std::fmt;
use std::time::{Duration, Instant};

use crate::random::generator::Generator;
use crate::utils::stats::SampleStats;

/// Options controlling what a run records besides the core observations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Keep every generated output in [`RunReport::samples`].
    pub capture_samples: bool,
}

/// Observations gathered by one harness run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Iteration budget the run was started with.
    pub requested: u64,
    /// Number of `generate` calls performed, including a collapsing one.
    pub iterations: u64,
    /// Number of distinct outputs observed.
    pub distinct: usize,
    /// 1-based iteration at which an output was first seen a second time.
    pub first_repeat: Option<u64>,
    /// 1-based iteration at which the output collapsed to zero.
    pub collapsed_at: Option<u64>,
    /// Wall-clock duration of the generation loop.
    pub elapsed: Duration,
    /// Captured outputs, empty unless requested.
    pub samples: Vec<u32>,
}

impl RunReport {
    /// Returns `true` if the run stopped early on a zero output.
    pub fn collapsed(&self) -> bool {
        self.collapsed_at.is_some()
    }

    /// Generated values per second, or `None` if no time was measured.
    pub fn throughput(&self) -> Option<f64> {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            Some(self.iterations as f64 / secs)
        } else {
            None
        }
    }

    /// Summary statistics over the captured samples.
    pub fn stats(&self) -> Option<SampleStats> {
        SampleStats::from_samples(&self.samples)
    }

    /// Captured samples rendered one decimal value per line.
    pub fn samples_text(&self) -> String {
        let mut out = String::with_capacity(self.samples.len() * 11);
        for value in &self.samples {
            out.push_str(&value.to_string());
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(at) = self.collapsed_at {
            writeln!(f, "collapsed to zero at iteration {}", at)?;
        }
        if let Some(at) = self.first_repeat {
            writeln!(f, "{} iterations before repeat", at)?;
        }
        writeln!(
            f,
            "{} of {} iterations completed, {} distinct values",
            self.iterations, self.requested, self.distinct
        )?;
        writeln!(f, "elapsed: {:.4}ms", self.elapsed.as_secs_f64() * 1000.0)?;
        match self.throughput() {
            Some(rate) => write!(f, "throughput: {:.0} values/s", rate),
            None => write!(f, "throughput: n/a"),
        }
    }
}

/// Runs `generator` for up to `count` steps with default options.
pub fn analyze<G: Generator + ?Sized>(generator: &mut G, count: u64) -> RunReport {
    analyze_with(generator, count, RunOptions::default())
}

/// Runs `generator` for up to `count` steps.
///
/// Stops early the first time the output is zero. The first repeat is
/// recorded once and never overwritten.
pub fn analyze_with<G: Generator + ?Sized>(
    generator: &mut G,
    count: u64,
    options: RunOptions,
) -> RunReport {
    let mut seen: HashSet<u32> = HashSet::new();
    let mut samples = Vec::new();
    let mut first_repeat = None;
    let mut collapsed_at = None;
    let mut iterations = 0u64;

    let start = Instant::now();
    for i in 0..count {
        let res = generator.generate();
        iterations = i + 1;
        if options.capture_samples {
            samples.push(res);
        }
        if !seen.insert(res) && first_repeat.is_none() {
            first_repeat = Some(i + 1);
        }
        if res == 0 {
            collapsed_at = Some(i + 1);
            break;
        }
    }
    let elapsed = start.elapsed();

    let report = RunReport {
        requested: count,
        iterations,
        distinct: seen.len(),
        first_repeat,
        collapsed_at,
        elapsed,
        samples,
    };
    tracing::debug!(
        requested = report.requested,
        iterations = report.iterations,
        distinct = report.distinct,
        first_repeat = ?report.first_repeat,
        collapsed_at = ?report.collapsed_at,
        elapsed_us = report.elapsed.as_micros() as u64,
        "analysis run finished"
    );
    report
}
