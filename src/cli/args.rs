use clap::Parser;
use std::path::PathBuf;

/// Process channel-validated payments against an account ledger
#[derive(Parser, Debug)]
#[command(name = "payments-ledger")]
#[command(about = "Process channel-validated payments against an account ledger", long_about = None)]
pub struct CliArgs {
    /// Account seed CSV file
    #[arg(value_name = "ACCOUNTS", help = "Path to the account seed CSV file")]
    pub accounts_file: PathBuf,

    /// Payments CSV file
    #[arg(value_name = "PAYMENTS", help = "Path to the payments CSV file")]
    pub payments_file: PathBuf,

    /// Dump each account's transaction history after the batch
    #[arg(long = "history", help = "Print per-account history to stderr")]
    pub history: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::no_history(&["program", "accounts.csv", "payments.csv"], false)]
    #[case::with_history(&["program", "accounts.csv", "payments.csv", "--history"], true)]
    fn test_argument_parsing(#[case] args: &[&str], #[case] expect_history: bool) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.accounts_file, PathBuf::from("accounts.csv"));
        assert_eq!(parsed.payments_file, PathBuf::from("payments.csv"));
        assert_eq!(parsed.history, expect_history);
    }

    #[test]
    fn test_missing_payments_file_is_an_error() {
        let result = CliArgs::try_parse_from(["program", "accounts.csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        let result =
            CliArgs::try_parse_from(["program", "accounts.csv", "payments.csv", "--verbose"]);
        assert!(result.is_err());
    }
}
