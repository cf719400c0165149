use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use clap::ValueEnum;

use crate::{debug_log, info_log};

pub const DEFAULT_BUILDER: &str = "./build/bin/wordle_builder";
pub const DEFAULT_SOLUTIONS: &str = "data/solutions.txt";
pub const DEFAULT_GUESSES: &str = "data/guesses.txt";
pub const DEFAULT_OUTPUT: &str = "solver_data.bin";

/// Guess-selection heuristic understood by the builder's `--heuristic` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Heuristic {
    #[value(name = "entropy")]
    Entropy,
    #[value(name = "min_expected")]
    MinExpected,
}

impl Heuristic {
    pub fn as_arg(self) -> &'static str {
        match self {
            Heuristic::Entropy => "entropy",
            Heuristic::MinExpected => "min_expected",
        }
    }
}

/// Fixed inputs shared by every builder invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    pub builder: PathBuf,
    pub solutions: PathBuf,
    pub guesses: PathBuf,
    pub heuristic: Option<Heuristic>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            builder: PathBuf::from(DEFAULT_BUILDER),
            solutions: PathBuf::from(DEFAULT_SOLUTIONS),
            guesses: PathBuf::from(DEFAULT_GUESSES),
            heuristic: None,
        }
    }
}

impl ToolConfig {
    pub fn args(&self, candidate: &str, output: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "--solutions".into(),
            self.solutions.clone().into(),
            "--guesses".into(),
            self.guesses.clone().into(),
            "--output".into(),
            output.into(),
            "--start-word".into(),
            candidate.into(),
        ];
        if let Some(heuristic) = self.heuristic {
            args.push("--heuristic".into());
            args.push(heuristic.as_arg().into());
        }
        args
    }
}

/// Captured result of one finished builder process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationResult {
    /// `None` when the process was terminated by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl InvocationResult {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Runs the solver-construction tool for one candidate, blocking until it exits.
///
/// `Err` means the process could not be run at all.
pub trait Invoker: Sync {
    fn invoke(&self, candidate: &str, output: &Path) -> io::Result<InvocationResult>;
}

pub struct BuilderInvoker {
    config: ToolConfig,
}

impl BuilderInvoker {
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }
}

impl Invoker for BuilderInvoker {
    fn invoke(&self, candidate: &str, output: &Path) -> io::Result<InvocationResult> {
        let args = self.config.args(candidate, output);
        info_log!("Running {} {:?}", self.config.builder.display(), args);
        let out = Command::new(&self.config.builder)
            .args(&args)
            .stdin(Stdio::null())
            .output()?;
        debug_log!(
            "'{}' finished with {:?} ({} bytes stdout, {} bytes stderr)",
            candidate,
            out.status,
            out.stdout.len(),
            out.stderr.len()
        );
        Ok(InvocationResult {
            status: out.status.code(),
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        })
    }
}

/// Per-invocation artifact path: `solver_data.bin` becomes `solver_data.<index>.<candidate>.bin`.
///
/// `index` is the candidate's position in the list, so repeated candidates still get distinct files.
pub fn unique_output_path(base: &Path, index: usize, candidate: &str) -> PathBuf {
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match base.extension() {
        Some(ext) => format!("{stem}.{index}.{candidate}.{}", ext.to_string_lossy()),
        None => format!("{stem}.{index}.{candidate}"),
    };
    base.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let config = ToolConfig::default();
        let args = config.args("salet", Path::new(DEFAULT_OUTPUT));
        let expected: Vec<OsString> = [
            "--solutions",
            "data/solutions.txt",
            "--guesses",
            "data/guesses.txt",
            "--output",
            "solver_data.bin",
            "--start-word",
            "salet",
        ]
        .iter()
        .map(OsString::from)
        .collect();
        assert_eq!(args, expected);
    }

    #[test]
    fn test_heuristic_forwarded() {
        let config = ToolConfig {
            heuristic: Some(Heuristic::MinExpected),
            ..ToolConfig::default()
        };
        let args = config.args("trace", Path::new("out.bin"));
        assert_eq!(args.len(), 10);
        assert_eq!(args[8], "--heuristic");
        assert_eq!(args[9], "min_expected");
    }

    #[test]
    fn test_unique_output_path() {
        assert_eq!(
            unique_output_path(Path::new("solver_data.bin"), 0, "salet"),
            PathBuf::from("solver_data.0.salet.bin")
        );
        assert_eq!(
            unique_output_path(Path::new("/tmp/run/tree"), 3, "crane"),
            PathBuf::from("/tmp/run/tree.3.crane")
        );
        assert_ne!(
            unique_output_path(Path::new("out.bin"), 0, "salet"),
            unique_output_path(Path::new("out.bin"), 1, "slate")
        );
        // same word listed twice
        assert_ne!(
            unique_output_path(Path::new("out.bin"), 0, "crane"),
            unique_output_path(Path::new("out.bin"), 1, "crane")
        );
    }

    #[test]
    fn test_success_requires_zero_exit() {
        let mut result = InvocationResult::default();
        assert!(!result.success());
        result.status = Some(0);
        assert!(result.success());
        result.status = Some(1);
        assert!(!result.success());
    }

    #[test]
    fn test_missing_builder_is_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let invoker = BuilderInvoker::new(ToolConfig {
            builder: dir.path().join("no_such_builder"),
            ..ToolConfig::default()
        });
        let err = invoker
            .invoke("salet", &dir.path().join("out.bin"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
