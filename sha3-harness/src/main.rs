use std::io;
use std::process::ExitCode;

use clap::Parser;
use digest_providers::{CandidateProvider, ReferenceProvider};
use digest_traits::Source;
use sha3_harness::{logging, Cli, Harness, HarnessError, RunOutcome};

/// Exit status when the report was printed but some pairs are missing.
const EXIT_INCOMPLETE: u8 = 3;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(outcome) if outcome.is_complete() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(EXIT_INCOMPLETE),
        Err(err) => {
            eprintln!("sha3-harness: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<RunOutcome, HarnessError> {
    let config = cli.into_config()?;
    let harness = Harness::new(ReferenceProvider::new(), candidate()?);
    let outcome = harness.run(&config)?;

    // Only reached when nothing fatal happened: the report is all or nothing.
    outcome.observations.render(io::stdout().lock())?;
    Ok(outcome)
}

#[cfg(not(feature = "libsha3"))]
fn candidate() -> Result<CandidateProvider, HarnessError> {
    CandidateProvider::builtin().map_err(|err| HarnessError::setup(Source::Candidate, err))
}

#[cfg(feature = "libsha3")]
fn candidate() -> Result<CandidateProvider, HarnessError> {
    CandidateProvider::linked().map_err(|err| HarnessError::setup(Source::Candidate, err))
}
