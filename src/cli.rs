use std::{num::NonZeroU16, path::PathBuf};

use clap::Parser;
use fuzzywarp::Execution;

#[derive(Debug, Parser)]
#[command(author, version, about)]
/// FFT-based tolerant pattern matching on DNA sequences
pub struct Cli {
    /// Path to the query file
    ///
    /// Note: the query contains (whitespace separated) the text length, the pattern length, the
    /// tolerance radius, the text and the pattern. Standard input is read if not specified
    pub input: Option<PathBuf>,

    /// Overrides the tolerance radius declared in the query
    #[arg(short, long)]
    pub radius: Option<usize>,

    /// Number of processors to use
    ///
    /// Uses all available processors if not specified. With a single processor bases are
    /// correlated one after the other, reusing the same FFT plans
    #[arg(long)]
    pub threads: Option<NonZeroU16>,

    /// Besides the number of matches, the matching offsets are reported on a second line
    #[arg(long, visible_alias = "offsets", alias = "reportOffsets")]
    pub report_offsets: bool,
}

impl Cli {
    pub fn execution(&self) -> Execution {
        match self.threads {
            Some(threads) if threads.get() == 1 => Execution::Sequential,
            _ => Execution::Parallel,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn execution_from_threads() {
        let cli = Cli::parse_from(["fuzzywarp", "query.txt"]);
        assert_eq!(cli.input, Some(PathBuf::from("query.txt")));
        assert_eq!(cli.execution(), Execution::Parallel);

        let cli = Cli::parse_from(["fuzzywarp", "--threads", "1", "-r", "3", "--offsets"]);
        assert_eq!(cli.input, None);
        assert_eq!(cli.radius, Some(3));
        assert!(cli.report_offsets);
        assert_eq!(cli.execution(), Execution::Sequential);

        let cli = Cli::parse_from(["fuzzywarp", "--threads", "4"]);
        assert_eq!(cli.execution(), Execution::Parallel);
    }

    #[test]
    fn zero_threads_are_rejected() {
        assert!(Cli::try_parse_from(["fuzzywarp", "--threads", "0"]).is_err());
    }
}
