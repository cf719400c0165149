use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::bench::BenchSettings;
use crate::candidates::SkipRules;
use crate::invoker::{
    DEFAULT_BUILDER, DEFAULT_GUESSES, DEFAULT_OUTPUT, DEFAULT_SOLUTIONS, Heuristic, ToolConfig,
};

/// Rank Wordle openers by the average guess count the solver builder reports for each
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Candidate list file; the first token of each line is a candidate
    pub candidates_path: Option<PathBuf>,

    /// Solver-construction executable
    #[arg(long, default_value = DEFAULT_BUILDER)]
    pub builder: PathBuf,

    /// Solutions word list passed to the builder
    #[arg(long, default_value = DEFAULT_SOLUTIONS)]
    pub solutions: PathBuf,

    /// Guesses word list passed to the builder
    #[arg(long, default_value = DEFAULT_GUESSES)]
    pub guesses: PathBuf,

    /// Builder output artifact (made unique per candidate when jobs > 1)
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Heuristic forwarded to the builder
    #[arg(long, value_enum)]
    pub heuristic: Option<Heuristic>,

    /// Number of builder processes to run at once
    #[arg(short = 'j', long, default_value_t = NonZeroUsize::MIN)]
    pub jobs: NonZeroUsize,

    /// Skip candidate-file lines containing this text (repeatable)
    #[arg(long = "skip-pattern", value_name = "TEXT")]
    pub skip_patterns: Vec<String>,

    /// Do not apply the built-in banner skip rules
    #[arg(long)]
    pub no_default_skips: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

impl Cli {
    pub fn tool_config(&self) -> ToolConfig {
        ToolConfig {
            builder: self.builder.clone(),
            solutions: self.solutions.clone(),
            guesses: self.guesses.clone(),
            heuristic: self.heuristic,
        }
    }

    pub fn bench_settings(&self) -> BenchSettings {
        BenchSettings {
            output: self.output.clone(),
            jobs: self.jobs,
        }
    }

    pub fn skip_rules(&self) -> SkipRules {
        let base = if self.no_default_skips {
            SkipRules::empty()
        } else {
            SkipRules::default()
        };
        self.skip_patterns
            .iter()
            .fold(base, |rules, needle| rules.with_custom(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_no_args() {
        let cli = Cli::try_parse_from(["opener-bench"]).unwrap();
        assert_eq!(cli.candidates_path, None);
        assert_eq!(cli.tool_config(), ToolConfig::default());
        assert_eq!(cli.bench_settings(), BenchSettings::default());
        assert_eq!(cli.skip_rules(), SkipRules::default());
    }

    #[test]
    fn test_parse_cli_with_path() {
        let cli = Cli::try_parse_from(["opener-bench", "openers.txt"]).unwrap();
        assert_eq!(cli.candidates_path, Some(PathBuf::from("openers.txt")));
    }

    #[test]
    fn test_rejects_second_positional() {
        assert!(Cli::try_parse_from(["opener-bench", "a.txt", "b.txt"]).is_err());
    }

    #[test]
    fn test_tool_flags() {
        let cli = Cli::try_parse_from([
            "opener-bench",
            "--builder",
            "/opt/wordle_builder",
            "--solutions",
            "sol.txt",
            "--guesses",
            "gue.txt",
            "--output",
            "tree.bin",
            "--heuristic",
            "min_expected",
            "-j",
            "4",
        ])
        .unwrap();
        let config = cli.tool_config();
        assert_eq!(config.builder, PathBuf::from("/opt/wordle_builder"));
        assert_eq!(config.solutions, PathBuf::from("sol.txt"));
        assert_eq!(config.guesses, PathBuf::from("gue.txt"));
        assert_eq!(config.heuristic, Some(Heuristic::MinExpected));
        let settings = cli.bench_settings();
        assert_eq!(settings.output, PathBuf::from("tree.bin"));
        assert_eq!(settings.jobs.get(), 4);
    }

    #[test]
    fn test_zero_jobs_rejected() {
        assert!(Cli::try_parse_from(["opener-bench", "--jobs", "0"]).is_err());
    }

    #[test]
    fn test_unknown_heuristic_rejected() {
        assert!(Cli::try_parse_from(["opener-bench", "--heuristic", "greedy"]).is_err());
    }

    #[test]
    fn test_skip_rules_from_flags() {
        let cli = Cli::try_parse_from([
            "opener-bench",
            "--no-default-skips",
            "--skip-pattern",
            "#",
            "--skip-pattern",
            "Loaded",
        ])
        .unwrap();
        let rules = cli.skip_rules();
        let needles: Vec<&str> = rules.patterns().iter().map(|p| p.needle.as_str()).collect();
        assert_eq!(needles, ["#", "Loaded"]);

        let cli = Cli::try_parse_from(["opener-bench", "--skip-pattern", "#"]).unwrap();
        assert_eq!(cli.skip_rules().patterns().len(), 6);
    }
}
