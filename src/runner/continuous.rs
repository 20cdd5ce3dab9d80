//! Continuous emission.
//!
//! Emits one sample per queue at a fixed wall-clock interval under a single
//! pinned scenario, simulating live telemetry. Runs until the shutdown
//! signal fires.

use chrono::Utc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time;

use crate::config::ContinuousConfig;
use crate::es::EsClient;
use crate::generator::scenario::Scenario;
use crate::generator::MetricsGenerator;

/// Depth above which a queue counts as critical in the iteration summary.
const CRITICAL_DEPTH: i64 = 4000;

/// Run the continuous loop until shutdown.
pub async fn run(
    client: &EsClient,
    generator: &mut MetricsGenerator,
    config: &ContinuousConfig,
    scenario: Scenario,
    mut shutdown: broadcast::Receiver<()>,
) {
    tracing::info!(
        index = client.index_name(),
        interval_seconds = config.interval_seconds,
        scenario = %scenario,
        queues = generator.queue_count(),
        "Starting continuous generation"
    );

    let mut ticker = time::interval(Duration::from_secs(config.interval_seconds));
    let mut iteration: u64 = 0;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                iteration += 1;
                let timestamp = Utc::now();
                let documents = generator.sample_all(scenario, timestamp);

                match client.bulk(&documents).await {
                    Ok(()) => {
                        let depths = generator.current_depths();
                        let avg = depths.iter().sum::<i64>() as f64 / depths.len() as f64;
                        let max = depths.iter().copied().max().unwrap_or(0);
                        let critical = depths.iter().filter(|&&d| d > CRITICAL_DEPTH).count();
                        tracing::info!(
                            iteration,
                            docs = documents.len(),
                            avg_depth = %format!("{:.0}", avg),
                            max_depth = max,
                            critical_queues = critical,
                            scenario = %scenario,
                            "Indexed samples"
                        );
                    }
                    Err(e) => {
                        tracing::error!(iteration, error = %e, "Failed to index samples");
                    }
                }
            }
            _ = shutdown.recv() => {
                tracing::info!(iterations = iteration, "Continuous generation stopped");
                break;
            }
        }
    }
}
