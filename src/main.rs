use opener_bench::cli::{Cli, parse_cli};
use opener_bench::{
    BuilderInvoker, CandidateList, HarnessError, Ranking, load_candidates_from_file, logging,
    run_benchmarks,
};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();
    let cli = parse_cli();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), HarnessError> {
    let candidates = match &cli.candidates_path {
        Some(path) => load_candidates_from_file(path, &cli.skip_rules())?,
        None => CandidateList::default_openers(),
    };

    let mut out = io::stdout();
    writeln!(out, "{}", candidates.status_line())?;

    let invoker = BuilderInvoker::new(cli.tool_config());
    let entries = run_benchmarks(candidates.words(), &invoker, &cli.bench_settings(), &mut out)?;
    Ranking::new(entries).write_report(&mut out)?;
    Ok(())
}
