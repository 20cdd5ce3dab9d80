//! Anomaly scenarios and the backfill timeline that schedules them.
//!
//! The backfill window tells a story designed for anomaly-detection demos:
//! a quiet first week establishes a baseline, later weeks layer in subtle
//! recurring degradations, two outages of different sizes, and random
//! peak-hour spikes that give ML jobs something to learn from.

use chrono::{DateTime, Datelike, Duration, Timelike, Utc, Weekday};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Behavior applied to a queue when computing one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Baseline traffic shaped only by the calendar patterns.
    Normal,
    /// Processing 10% slower than arrivals; barely visible.
    SubtleDegradation,
    /// Sustained 5% depth growth per interval.
    GradualDegradation,
    /// Severe backlog growth, output at 40% of input.
    CriticalBuildup,
    /// Complete stall at capacity.
    QueueFull,
    /// Partial stall; some processing continues.
    MiniOutage,
    /// Sudden traffic surge during peak hours.
    Spike,
    /// Recurring slowdown targeting SWIFT queues.
    SwiftSlowdown,
    /// Recurring buildup targeting ISO 20022 transformation queues.
    IsoBuildup,
    /// Post-incident drain, output outpacing input.
    Recovery,
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Scenario::Normal),
            "subtle_degradation" => Ok(Scenario::SubtleDegradation),
            "gradual_degradation" => Ok(Scenario::GradualDegradation),
            "critical_buildup" => Ok(Scenario::CriticalBuildup),
            "queue_full" => Ok(Scenario::QueueFull),
            "mini_outage" => Ok(Scenario::MiniOutage),
            "spike" => Ok(Scenario::Spike),
            "swift_slowdown" => Ok(Scenario::SwiftSlowdown),
            "iso_buildup" => Ok(Scenario::IsoBuildup),
            "recovery" => Ok(Scenario::Recovery),
            other => Err(format!("unknown scenario '{}'", other)),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scenario::Normal => "normal",
            Scenario::SubtleDegradation => "subtle_degradation",
            Scenario::GradualDegradation => "gradual_degradation",
            Scenario::CriticalBuildup => "critical_buildup",
            Scenario::QueueFull => "queue_full",
            Scenario::MiniOutage => "mini_outage",
            Scenario::Spike => "spike",
            Scenario::SwiftSlowdown => "swift_slowdown",
            Scenario::IsoBuildup => "iso_buildup",
            Scenario::Recovery => "recovery",
        };
        write!(f, "{}", name)
    }
}

/// Schedules scenarios across a backfill window anchored at `start`.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioTimeline {
    start: DateTime<Utc>,
}

impl ScenarioTimeline {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { start }
    }

    /// Scenario in effect at `timestamp`.
    ///
    /// Weeks 9-12 roll a 5% chance of a spike during peak hours, hence the
    /// rng parameter; every other branch is deterministic.
    pub fn scenario_at<R: Rng>(&self, timestamp: DateTime<Utc>, rng: &mut R) -> Scenario {
        let days_elapsed = (timestamp - self.start).num_days();
        let hour = timestamp.hour();
        let weekday = timestamp.weekday();

        match days_elapsed {
            // Week 1: baseline.
            d if d < 7 => Scenario::Normal,

            // Week 2: subtle Monday-morning slowdowns.
            d if d < 14 => {
                if weekday == Weekday::Mon && (9..11).contains(&hour) {
                    Scenario::SubtleDegradation
                } else {
                    Scenario::Normal
                }
            }

            // Week 3: afternoon degradation (connection-pool trouble).
            d if d < 21 => {
                if (14..17).contains(&hour) {
                    Scenario::GradualDegradation
                } else {
                    Scenario::Normal
                }
            }

            // Week 4: a small incident plus end-of-month strain.
            d if d < 28 => {
                if d == 24 {
                    let outage_start =
                        self.start + Duration::days(24) + Duration::hours(14) + Duration::minutes(30);
                    let outage_end = outage_start + Duration::minutes(8);
                    if timestamp >= outage_start && timestamp < outage_end {
                        return Scenario::MiniOutage;
                    }
                }
                if d >= 27 {
                    Scenario::CriticalBuildup
                } else {
                    Scenario::Normal
                }
            }

            // Week 5: the major 19-minute outage and its aftermath.
            d if d < 35 => {
                if d == 30 {
                    let outage_start =
                        self.start + Duration::days(30) + Duration::hours(14) + Duration::minutes(30);
                    let outage_end = outage_start + Duration::minutes(19);
                    if timestamp >= outage_start && timestamp < outage_end {
                        return Scenario::QueueFull;
                    }
                    if timestamp >= outage_end && timestamp < outage_end + Duration::hours(2) {
                        return Scenario::Recovery;
                    }
                }
                if d == 31 {
                    Scenario::Recovery
                } else {
                    Scenario::Normal
                }
            }

            // Weeks 6-8: recurring weekday patterns for ML to learn.
            d if d < 56 => {
                if weekday == Weekday::Wed && (14..16).contains(&hour) {
                    Scenario::SwiftSlowdown
                } else if weekday == Weekday::Fri && (10..15).contains(&hour) {
                    Scenario::IsoBuildup
                } else {
                    Scenario::Normal
                }
            }

            // Weeks 9-12: occasional random spikes at predictable hours.
            d if d < 84 => {
                let peak = (9..11).contains(&hour) || (14..16).contains(&hour);
                if peak && rng.gen_bool(0.05) {
                    Scenario::Spike
                } else {
                    Scenario::Normal
                }
            }

            // Week 13+: back to baseline.
            _ => Scenario::Normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn timeline() -> ScenarioTimeline {
        // Monday midnight so weekday arithmetic is easy to follow.
        ScenarioTimeline::new(Utc.with_ymd_and_hms(2025, 1, 6, 0, 0, 0).unwrap())
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_week_one_is_baseline() {
        let t = timeline();
        let ts = Utc.with_ymd_and_hms(2025, 1, 8, 10, 0, 0).unwrap();
        assert_eq!(t.scenario_at(ts, &mut rng()), Scenario::Normal);
    }

    #[test]
    fn test_week_two_monday_morning_slowdown() {
        let t = timeline();
        // Day 7 is Monday 2025-01-13.
        let inside = Utc.with_ymd_and_hms(2025, 1, 13, 9, 30, 0).unwrap();
        assert_eq!(t.scenario_at(inside, &mut rng()), Scenario::SubtleDegradation);

        let outside = Utc.with_ymd_and_hms(2025, 1, 13, 11, 0, 0).unwrap();
        assert_eq!(t.scenario_at(outside, &mut rng()), Scenario::Normal);

        // Same hours, but Tuesday.
        let tuesday = Utc.with_ymd_and_hms(2025, 1, 14, 9, 30, 0).unwrap();
        assert_eq!(t.scenario_at(tuesday, &mut rng()), Scenario::Normal);
    }

    #[test]
    fn test_week_three_afternoon_degradation() {
        let t = timeline();
        let ts = Utc.with_ymd_and_hms(2025, 1, 21, 15, 0, 0).unwrap();
        assert_eq!(t.scenario_at(ts, &mut rng()), Scenario::GradualDegradation);

        let ts = Utc.with_ymd_and_hms(2025, 1, 21, 17, 0, 0).unwrap();
        assert_eq!(t.scenario_at(ts, &mut rng()), Scenario::Normal);
    }

    #[test]
    fn test_mini_outage_window() {
        let t = timeline();
        // Day 24 = 2025-01-30; window 14:30-14:38.
        let during = Utc.with_ymd_and_hms(2025, 1, 30, 14, 33, 0).unwrap();
        assert_eq!(t.scenario_at(during, &mut rng()), Scenario::MiniOutage);

        let after = Utc.with_ymd_and_hms(2025, 1, 30, 14, 40, 0).unwrap();
        assert_ne!(t.scenario_at(after, &mut rng()), Scenario::MiniOutage);
    }

    #[test]
    fn test_major_outage_and_recovery() {
        let t = timeline();
        // Day 30 = 2025-02-05; outage 14:30-14:49, recovery until 16:49.
        let during = Utc.with_ymd_and_hms(2025, 2, 5, 14, 45, 0).unwrap();
        assert_eq!(t.scenario_at(during, &mut rng()), Scenario::QueueFull);

        let draining = Utc.with_ymd_and_hms(2025, 2, 5, 15, 30, 0).unwrap();
        assert_eq!(t.scenario_at(draining, &mut rng()), Scenario::Recovery);

        let next_day = Utc.with_ymd_and_hms(2025, 2, 6, 9, 0, 0).unwrap();
        assert_eq!(t.scenario_at(next_day, &mut rng()), Scenario::Recovery);
    }

    #[test]
    fn test_recurring_weekly_patterns() {
        let t = timeline();
        // Day 44 = Wednesday 2025-02-19.
        let wed = Utc.with_ymd_and_hms(2025, 2, 19, 14, 30, 0).unwrap();
        assert_eq!(t.scenario_at(wed, &mut rng()), Scenario::SwiftSlowdown);

        // Day 46 = Friday 2025-02-21.
        let fri = Utc.with_ymd_and_hms(2025, 2, 21, 12, 0, 0).unwrap();
        assert_eq!(t.scenario_at(fri, &mut rng()), Scenario::IsoBuildup);
    }

    #[test]
    fn test_spike_weeks_only_spike_at_peak() {
        let t = timeline();
        let mut r = rng();
        // Day 60 = 2025-03-07; off-peak hour can never spike.
        let off_peak = Utc.with_ymd_and_hms(2025, 3, 7, 3, 0, 0).unwrap();
        for _ in 0..200 {
            assert_eq!(t.scenario_at(off_peak, &mut r), Scenario::Normal);
        }

        // Peak hour spikes with 5% probability; 200 draws should hit at
        // least one with overwhelming likelihood.
        let peak = Utc.with_ymd_and_hms(2025, 3, 7, 10, 0, 0).unwrap();
        let hits = (0..200)
            .filter(|_| t.scenario_at(peak, &mut r) == Scenario::Spike)
            .count();
        assert!(hits > 0);
    }

    #[test]
    fn test_far_future_is_baseline() {
        let t = timeline();
        let ts = Utc.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap();
        assert_eq!(t.scenario_at(ts, &mut rng()), Scenario::Normal);
    }

    #[test]
    fn test_scenario_name_roundtrip() {
        for name in [
            "normal",
            "subtle_degradation",
            "gradual_degradation",
            "critical_buildup",
            "queue_full",
            "mini_outage",
            "spike",
            "swift_slowdown",
            "iso_buildup",
            "recovery",
        ] {
            let scenario: Scenario = name.parse().unwrap();
            assert_eq!(scenario.to_string(), name);
        }
        assert!("meltdown".parse::<Scenario>().is_err());
    }
}
