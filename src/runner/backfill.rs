//! Historical backfill.
//!
//! Walks a past time window at a fixed sample interval, generating one
//! document per queue per step and flushing them in bulk batches. Scenarios
//! follow the anomaly timeline anchored at the window start. A failed batch
//! is logged and dropped; the walk continues.

use chrono::{DateTime, Duration, Utc};

use crate::config::BackfillConfig;
use crate::es::EsClient;
use crate::generator::{MetricsGenerator, ScenarioTimeline};
use crate::model::MetricsDocument;

/// Run a historical backfill ending at `end_time`.
pub async fn run(
    client: &EsClient,
    generator: &mut MetricsGenerator,
    config: &BackfillConfig,
    end_time: DateTime<Utc>,
) {
    let start_time = end_time - Duration::days(config.days as i64);
    let step = Duration::minutes(config.interval_minutes as i64);
    let timeline = ScenarioTimeline::new(start_time);

    let expected = config.days as u64 * 24 * 60 * generator.queue_count() as u64
        / config.interval_minutes as u64;
    tracing::info!(
        index = client.index_name(),
        days = config.days,
        interval_minutes = config.interval_minutes,
        queues = generator.queue_count(),
        expected_docs = expected,
        "Starting historical backfill"
    );
    tracing::info!(
        "Anomaly timeline: wk1 baseline, wk2 Monday-morning slowdowns, \
         wk3 afternoon degradation, wk4 mini-outage + month-end spike, \
         wk5 major outage day 30, wk6-8 recurring Wed/Fri patterns, \
         wk9-12 random peak spikes, wk13+ baseline"
    );

    let total_secs = (end_time - start_time).num_seconds() as f64;
    let mut current_time = start_time;
    let mut batch: Vec<MetricsDocument> = Vec::with_capacity(config.batch_size);
    let mut total_docs: u64 = 0;
    let mut failed_batches: u64 = 0;
    let mut last_scenario = None;
    let mut scenario_changes: u64 = 0;

    while current_time <= end_time {
        let scenario = generator.scheduled_scenario(&timeline, current_time);
        if last_scenario != Some(scenario) {
            scenario_changes += 1;
            last_scenario = Some(scenario);
        }

        batch.extend(generator.sample_all(scenario, current_time));
        total_docs += generator.queue_count() as u64;

        if batch.len() >= config.batch_size {
            match client.bulk(&batch).await {
                Ok(()) => {
                    let progress =
                        (current_time - start_time).num_seconds() as f64 / total_secs * 100.0;
                    tracing::info!(
                        progress_pct = %format!("{:.1}", progress),
                        docs = total_docs,
                        at = %current_time.format("%Y-%m-%d %H:%M (%a)"),
                        scenario = %scenario,
                        scenario_changes,
                        "Backfill progress"
                    );
                }
                Err(e) => {
                    failed_batches += 1;
                    tracing::error!(
                        at = %current_time.format("%Y-%m-%d %H:%M"),
                        error = %e,
                        "Failed to index batch"
                    );
                }
            }
            batch.clear();
        }

        current_time += step;
    }

    if !batch.is_empty() {
        if let Err(e) = client.bulk(&batch).await {
            failed_batches += 1;
            tracing::error!(error = %e, "Failed to index final batch");
        }
    }

    tracing::info!(
        total_docs,
        failed_batches,
        scenario_changes,
        from = %start_time.format("%Y-%m-%d"),
        to = %end_time.format("%Y-%m-%d"),
        "Historical backfill complete"
    );
}
