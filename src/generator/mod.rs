//! Synthetic metrics generation subsystem.
//!
//! # Data Flow
//! ```text
//! timestamp
//!     → patterns.rs (hour/week/month multipliers)
//!     → scenario.rs (timeline picks the active anomaly)
//!     → state.rs (per-queue depth evolution + counters)
//!     → model::document (one document per queue)
//! ```
//!
//! # Design Decisions
//! - One generator owns all queue state; samples are strictly sequential
//! - Seedable RNG so tests are deterministic

pub mod patterns;
pub mod scenario;
pub mod state;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::QueueConfig;
use crate::generator::scenario::Scenario;
use crate::generator::state::{next_sample, QueueState};
use crate::model::document::MetricsDocument;

pub use scenario::ScenarioTimeline;

/// Fabricates queue metrics documents, evolving per-queue state as it goes.
pub struct MetricsGenerator {
    queues: Vec<QueueConfig>,
    states: Vec<QueueState>,
    rng: StdRng,
}

impl MetricsGenerator {
    /// Create a generator with entropy-seeded randomness.
    pub fn new(queues: Vec<QueueConfig>) -> Self {
        Self::with_rng(queues, StdRng::from_entropy())
    }

    /// Create a generator with a fixed seed (deterministic output).
    pub fn with_seed(queues: Vec<QueueConfig>, seed: u64) -> Self {
        Self::with_rng(queues, StdRng::seed_from_u64(seed))
    }

    fn with_rng(queues: Vec<QueueConfig>, mut rng: StdRng) -> Self {
        let states = queues
            .iter()
            .map(|q| QueueState::seeded(q, &mut rng))
            .collect();
        Self { queues, states, rng }
    }

    /// Number of configured queues.
    pub fn queue_count(&self) -> usize {
        self.queues.len()
    }

    /// Pick the scenario a timeline schedules for `timestamp`.
    pub fn scheduled_scenario(
        &mut self,
        timeline: &ScenarioTimeline,
        timestamp: DateTime<Utc>,
    ) -> Scenario {
        timeline.scenario_at(timestamp, &mut self.rng)
    }

    /// Produce one document per queue for a single instant.
    pub fn sample_all(&mut self, scenario: Scenario, timestamp: DateTime<Utc>) -> Vec<MetricsDocument> {
        let multiplier = patterns::combined_multiplier(timestamp);
        let mut documents = Vec::with_capacity(self.queues.len());
        for (queue, state) in self.queues.iter().zip(self.states.iter_mut()) {
            let sample = next_sample(queue, state, scenario, multiplier, &mut self.rng);
            documents.push(MetricsDocument::new(queue, &sample, timestamp));
        }
        documents
    }

    /// Current depths across all queues, for progress reporting.
    pub fn current_depths(&self) -> Vec<i64> {
        self.states.iter().map(|s| s.current_depth).collect()
    }
}
