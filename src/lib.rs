// Library interface for opener-bench
// This allows integration tests to access internal modules

pub mod bench;
pub mod candidates;
pub mod cli;
pub mod error;
pub mod invoker;
pub mod logging;
pub mod metric;
pub mod report;

// Re-export commonly used items for easier testing
pub use bench::{BenchSettings, measure, run_benchmarks};
pub use candidates::{CandidateList, SkipRules, load_candidates_from_file, load_candidates_from_str};
pub use error::HarnessError;
pub use invoker::{BuilderInvoker, InvocationResult, Invoker, ToolConfig};
pub use metric::{Outcome, extract_average};
pub use report::{Ranking, ScoreEntry};
