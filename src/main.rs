//! Synthetic IBM MQ Metrics Generator
//!
//! Fabricates realistic IBM MQ queue-depth metrics and indexes them into
//! Elasticsearch for anomaly-detection demos.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────────┐
//!                  │                MQ METRICS GENERATOR               │
//!                  │                                                   │
//!   env / CLI ─────┼─▶ config ─▶ ┌───────────┐   ┌─────────────────┐  │
//!                  │             │ provision │──▶│ PUT /{index}    │──┼──▶ Elasticsearch
//!                  │             └───────────┘   │ (mapping + ILM) │  │
//!                  │                             └─────────────────┘  │
//!                  │             ┌───────────┐   ┌─────────────────┐  │
//!                  │             │ generator │──▶│ POST /_bulk     │──┼──▶ Elasticsearch
//!                  │             │ patterns  │   │ (NDJSON batches)│  │
//!                  │             │ scenarios │   └─────────────────┘  │
//!                  │             │ state     │                        │
//!                  │             └───────────┘                        │
//!                  │                                                   │
//!                  │  Cross-cutting: tracing, shutdown signal, config  │
//!                  └──────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mq_metrics_gen::cli::{Cli, Command};
use mq_metrics_gen::config::loader::{self, ConfigError};
use mq_metrics_gen::config::Mode;
use mq_metrics_gen::generator::scenario::Scenario;
use mq_metrics_gen::lifecycle::signals;
use mq_metrics_gen::{EsClient, MetricsGenerator, Shutdown};
use mq_metrics_gen::runner;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mq_metrics_gen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Env supplies the base config; CLI flags win where given.
    let mut config = loader::load_with(|name| match name {
        "ES_URL" => cli.es_url.clone().or_else(|| std::env::var(name).ok()),
        "ES_API_KEY" => cli.api_key.clone().or_else(|| std::env::var(name).ok()),
        "INDEX_NAME" => cli.index.clone().or_else(|| std::env::var(name).ok()),
        _ => std::env::var(name).ok(),
    })?;

    if let Some(path) = &cli.queues {
        config.queues = loader::load_topology(path)?.queues;
        tracing::info!(file = %path.display(), queues = config.queues.len(), "Loaded queue topology");
    }

    match &cli.command {
        Some(Command::Provision) => {}
        Some(Command::Backfill {
            days,
            interval_minutes,
        }) => {
            config.mode = Mode::Backfill;
            if let Some(d) = days {
                config.backfill.days = *d;
            }
            if let Some(m) = interval_minutes {
                config.backfill.interval_minutes = *m;
            }
        }
        Some(Command::Continuous {
            scenario,
            interval_seconds,
        }) => {
            config.mode = Mode::Continuous;
            if let Some(s) = scenario {
                config.continuous.scenario = s.clone();
            }
            if let Some(i) = interval_seconds {
                config.continuous.interval_seconds = *i;
            }
        }
        None => {}
    }

    let client = EsClient::new(&config.elasticsearch)?;

    // Explicit provisioning is one PUT; the server's verdict (including
    // index-already-exists) is the exit status.
    if matches!(cli.command, Some(Command::Provision)) {
        client.create_index().await?;
        return Ok(());
    }

    let info = client.ping().await?;
    tracing::info!(
        cluster = info.cluster_name.as_deref().unwrap_or("unknown"),
        version = info
            .version
            .as_ref()
            .and_then(|v| v.number.as_deref())
            .unwrap_or("unknown"),
        "Connected to Elasticsearch"
    );

    client.ensure_index().await?;

    let mut generator = MetricsGenerator::new(config.queues.clone());

    match config.mode {
        Mode::Backfill => {
            runner::backfill::run(&client, &mut generator, &config.backfill, Utc::now()).await;
        }
        Mode::Continuous => {
            let scenario: Scenario =
                config
                    .continuous
                    .scenario
                    .parse()
                    .map_err(|reason| ConfigError::InvalidVar {
                        name: "CONTINUOUS_SCENARIO",
                        value: config.continuous.scenario.clone(),
                        reason,
                    })?;

            let shutdown = Shutdown::new();
            signals::spawn_ctrl_c_handler(shutdown.clone());
            runner::continuous::run(
                &client,
                &mut generator,
                &config.continuous,
                scenario,
                shutdown.subscribe(),
            )
            .await;
        }
    }

    tracing::info!("Done");
    Ok(())
}
