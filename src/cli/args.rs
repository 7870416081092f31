use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Benchmark CSV bulk-load strategies against SQLite
#[derive(Parser, Debug)]
#[command(name = "sqlite-load-bench")]
#[command(about = "Benchmark CSV bulk-load strategies against SQLite", long_about = None)]
pub struct CliArgs {
    /// Optional mode; `gen` regenerates the data file before benchmarking
    #[arg(value_name = "MODE", help = "Pass 'gen' to regenerate the data file first")]
    pub mode: Option<Mode>,

    /// Number of rows to generate in `gen` mode
    #[arg(
        long = "rows",
        value_name = "COUNT",
        default_value_t = 1_000_000,
        help = "Rows to generate when MODE is 'gen' (default: 1000000)"
    )]
    pub rows: usize,

    /// Path of the delimited data file
    #[arg(
        long = "data-file",
        value_name = "PATH",
        default_value = "testdata.csv",
        help = "Data file to generate and/or load"
    )]
    pub data_file: PathBuf,

    /// Run a single strategy instead of the whole suite
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        help = "Run only the named strategy (default: the full suite)"
    )]
    pub strategy: Option<StrategyType>,
}

/// Positional run modes
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Mode {
    /// Regenerate the synthetic data file before benchmarking
    Gen,
}

/// Available insert strategies
///
/// `Import` drives the native `sqlite3` shell; the rest go through the
/// programmatic insert path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Import,
    Naive,
    Prepared,
    Tx,
    TxPrepared,
    Bulk,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::no_mode(&["program"], false)]
    #[case::gen_mode(&["program", "gen"], true)]
    fn test_mode_parsing(#[case] args: &[&str], #[case] expect_gen: bool) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(matches!(parsed.mode, Some(Mode::Gen)), expect_gen);
    }

    #[rstest]
    #[case::defaults(&["program"], 1_000_000, "testdata.csv")]
    #[case::custom_rows(&["program", "gen", "--rows", "500"], 500, "testdata.csv")]
    #[case::custom_file(&["program", "--data-file", "other.csv"], 1_000_000, "other.csv")]
    fn test_generation_options(
        #[case] args: &[&str],
        #[case] rows: usize,
        #[case] data_file: &str,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.rows, rows);
        assert_eq!(parsed.data_file, PathBuf::from(data_file));
    }

    #[rstest]
    #[case::import(&["program", "--strategy", "import"], StrategyType::Import)]
    #[case::naive(&["program", "--strategy", "naive"], StrategyType::Naive)]
    #[case::prepared(&["program", "--strategy", "prepared"], StrategyType::Prepared)]
    #[case::tx(&["program", "--strategy", "tx"], StrategyType::Tx)]
    #[case::tx_prepared(&["program", "--strategy", "tx-prepared"], StrategyType::TxPrepared)]
    #[case::bulk(&["program", "--strategy", "bulk"], StrategyType::Bulk)]
    fn test_strategy_parsing(#[case] args: &[&str], #[case] expected: StrategyType) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.strategy, Some(expected));
    }

    #[test]
    fn test_no_strategy_means_full_suite() {
        let parsed = CliArgs::try_parse_from(["program"]).unwrap();
        assert_eq!(parsed.strategy, None);
    }

    #[rstest]
    #[case::unknown_mode(&["program", "bench"])]
    #[case::unknown_strategy(&["program", "--strategy", "fastest"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
