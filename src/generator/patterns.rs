//! Calendar load patterns.
//!
//! Three multipliers shape the baseline traffic so the fabricated series
//! looks like a real UK payments estate: an intraday banking-hours curve, a
//! front-loaded working week, and month-boundary processing rushes. The
//! product of the three scales both depth and rate targets.

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};

/// Intraday multiplier for UK banking hours.
pub fn hourly_multiplier(hour: u32) -> f64 {
    match hour {
        0..=5 => 0.3,   // night
        6..=8 => 0.6,   // early ramp up
        9..=10 => 1.3,  // morning peak
        11..=13 => 1.0, // lunch
        14..=15 => 1.4, // afternoon peak
        16..=17 => 0.9, // wind down
        _ => 0.5,       // evening
    }
}

/// Weekly multiplier; Monday is the busiest day, weekends nearly idle.
pub fn weekly_multiplier(weekday: Weekday) -> f64 {
    match weekday {
        Weekday::Mon => 1.4,
        Weekday::Tue => 1.3,
        Weekday::Wed => 1.2,
        Weekday::Thu => 1.1,
        Weekday::Fri => 0.9,
        Weekday::Sat => 0.3,
        Weekday::Sun => 0.2,
    }
}

/// Monthly multiplier: end-of-month payment rush, start-of-month statements,
/// mid-month payroll.
pub fn monthly_multiplier(day_of_month: u32) -> f64 {
    if day_of_month >= 28 {
        1.5
    } else if day_of_month <= 3 {
        1.3
    } else if (14..=16).contains(&day_of_month) {
        1.2
    } else {
        1.0
    }
}

/// Product of all three patterns at a given instant.
pub fn combined_multiplier(timestamp: DateTime<Utc>) -> f64 {
    hourly_multiplier(timestamp.hour())
        * weekly_multiplier(timestamp.weekday())
        * monthly_multiplier(timestamp.day())
}
