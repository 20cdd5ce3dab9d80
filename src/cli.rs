//! Command-line interface.
//!
//! Flags override environment variables; a subcommand overrides `MODE`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mq-metrics-gen")]
#[command(about = "Synthetic IBM MQ queue metrics for Elasticsearch demos", long_about = None)]
pub struct Cli {
    /// Elasticsearch base URL (overrides ES_URL)
    #[arg(long)]
    pub es_url: Option<String>,

    /// Elasticsearch API key (overrides ES_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Target index name (overrides INDEX_NAME)
    #[arg(long)]
    pub index: Option<String>,

    /// Queue topology TOML file replacing the built-in payments topology
    #[arg(long, value_name = "FILE")]
    pub queues: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create the index with the demo mapping and lifecycle binding
    Provision,
    /// Generate a historical window of documents in one pass
    Backfill {
        /// Days of history ending now (overrides BACKFILL_DAYS)
        #[arg(long)]
        days: Option<u32>,

        /// Minutes between samples (overrides BACKFILL_INTERVAL_MINUTES)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        interval_minutes: Option<u32>,
    },
    /// Emit documents at a fixed interval until interrupted
    Continuous {
        /// Scenario applied to every sample (overrides CONTINUOUS_SCENARIO)
        #[arg(long)]
        scenario: Option<String>,

        /// Seconds between samples (overrides CONTINUOUS_INTERVAL_SECONDS)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        interval_seconds: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_intervals_rejected_at_parse() {
        let err = Cli::try_parse_from(["mq-metrics-gen", "backfill", "--interval-minutes", "0"]);
        assert!(err.is_err());

        let err =
            Cli::try_parse_from(["mq-metrics-gen", "continuous", "--interval-seconds", "0"]);
        assert!(err.is_err());
    }

    #[test]
    fn test_subcommand_flags_parse() {
        let cli = Cli::try_parse_from([
            "mq-metrics-gen",
            "backfill",
            "--days",
            "30",
            "--interval-minutes",
            "5",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Backfill {
                days,
                interval_minutes,
            }) => {
                assert_eq!(days, Some(30));
                assert_eq!(interval_minutes, Some(5));
            }
            _ => panic!("expected backfill subcommand"),
        }
    }
}
