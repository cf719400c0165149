use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rayon::prelude::*;

use crate::error::HarnessError;
use crate::{debug_log, info_log};
use crate::invoker::{DEFAULT_OUTPUT, Invoker, unique_output_path};
use crate::metric::{Outcome, evaluate};
use crate::report::ScoreEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchSettings {
    pub output: PathBuf,
    pub jobs: NonZeroUsize,
}

impl Default for BenchSettings {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            jobs: NonZeroUsize::MIN,
        }
    }
}

/// Invokes and classifies one candidate. Never fails: spawn errors become an outcome.
pub fn measure<I: Invoker + ?Sized>(invoker: &I, candidate: &str, output: &Path) -> Outcome {
    match invoker.invoke(candidate, output) {
        Ok(result) => evaluate(&result),
        Err(e) => {
            debug_log!("Could not run builder for '{}': {}", candidate, e);
            Outcome::SpawnFailed(e.to_string())
        }
    }
}

fn write_outcome<W: Write + ?Sized>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
    writeln!(out, " {outcome}")?;
    if let Outcome::Failed { stderr, .. } = outcome {
        let stderr = stderr.trim_end();
        if !stderr.is_empty() {
            writeln!(out, "{stderr}")?;
        }
    }
    out.flush()
}

/// Benchmarks every candidate and returns the scored ones in candidate order.
pub fn run_benchmarks<I, W>(
    candidates: &[String],
    invoker: &I,
    settings: &BenchSettings,
    out: &mut W,
) -> Result<Vec<ScoreEntry>, HarnessError>
where
    I: Invoker,
    W: Write + Send,
{
    writeln!(out, "Testing {} starting words...", candidates.len())?;
    out.flush()?;

    let outcomes = if settings.jobs.get() == 1 {
        run_sequential(candidates, invoker, &settings.output, out)?
    } else {
        run_pooled(candidates, invoker, settings, out)?
    };

    Ok(candidates
        .iter()
        .zip(outcomes)
        .filter_map(|(candidate, outcome)| {
            outcome
                .metric()
                .map(|metric| ScoreEntry::new(candidate.clone(), metric))
        })
        .collect())
}

fn run_sequential<I: Invoker, W: Write>(
    candidates: &[String],
    invoker: &I,
    output: &Path,
    out: &mut W,
) -> io::Result<Vec<Outcome>> {
    let mut outcomes = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        write!(out, "Testing '{candidate}'...")?;
        out.flush()?;
        let outcome = measure(invoker, candidate, output);
        write_outcome(out, &outcome)?;
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

/// Each worker writes its own artifact, so the shared output path is never raced.
fn run_pooled<I, W>(
    candidates: &[String],
    invoker: &I,
    settings: &BenchSettings,
    out: &mut W,
) -> Result<Vec<Outcome>, HarnessError>
where
    I: Invoker,
    W: Write + Send,
{
    info_log!("Starting worker pool with {} threads", settings.jobs);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(settings.jobs.get())
        .build()?;
    let out = Mutex::new(out);

    let outcomes = pool.install(|| {
        candidates
            .par_iter()
            .enumerate()
            .map(|(index, candidate)| -> io::Result<Outcome> {
                let output = unique_output_path(&settings.output, index, candidate);
                info_log!("Benchmarking '{}' -> {}", candidate, output.display());
                let outcome = measure(invoker, candidate, &output);
                let mut out = out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                write!(out, "Testing '{candidate}'...")?;
                write_outcome(&mut **out, &outcome)?;
                Ok(outcome)
            })
            .collect::<io::Result<Vec<_>>>()
    })?;
    Ok(outcomes)
}
