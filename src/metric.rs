use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::debug_log;
use crate::invoker::InvocationResult;

static AVERAGE_GUESSES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Average Guesses: ([0-9]+\.[0-9]+)").expect("metric pattern is valid")
});

/// What one candidate's benchmark amounted to.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Scored(f64),
    /// The tool ran but exited non-zero, or was killed (`status == None`).
    Failed { status: Option<i32>, stderr: String },
    Unparsed,
    SpawnFailed(String),
}

impl Outcome {
    pub fn metric(&self) -> Option<f64> {
        match self {
            Outcome::Scored(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Scored(value) => write!(f, "Average: {value}"),
            Outcome::Failed {
                status: Some(code), ..
            } => write!(f, "Failed (exit status {code})."),
            Outcome::Failed { status: None, .. } => f.write_str("Failed (terminated by signal)."),
            Outcome::Unparsed => f.write_str("Could not parse average."),
            Outcome::SpawnFailed(message) => write!(f, "Error: {message}"),
        }
    }
}

/// Finds the `Average Guesses: <x.y>` figure in the builder's stdout.
pub fn extract_average(stdout: &str) -> Option<f64> {
    AVERAGE_GUESSES
        .captures(stdout)
        .and_then(|caps| caps[1].parse().ok())
}

pub fn evaluate(result: &InvocationResult) -> Outcome {
    if !result.success() {
        return Outcome::Failed {
            status: result.status,
            stderr: result.stderr.clone(),
        };
    }
    match extract_average(&result.stdout) {
        Some(value) => Outcome::Scored(value),
        None => {
            debug_log!("Builder exited cleanly but printed no average");
            Outcome::Unparsed
        }
    }
}
