use chrono::Timelike;

use crate::model::ForecastEntry;

/// Days shown in the forecast strip.
pub const MAX_FORECAST_DAYS: usize = 5;

/// Pick one representative entry per day from a 3-hourly forecast series.
///
/// Scans chronologically and keeps entries sampled at 12:00:00 UTC,
/// stopping once `max_days` are collected. A series with no midday sample
/// (sub-daily granularity misaligned with noon) falls back to the first
/// `max_days` entries unfiltered. Input order is preserved either way.
pub fn select_daily(entries: &[ForecastEntry], max_days: usize) -> Vec<ForecastEntry> {
    let mut picked = Vec::with_capacity(max_days);

    for entry in entries {
        if is_midday(entry) {
            picked.push(entry.clone());
            if picked.len() >= max_days {
                break;
            }
        }
    }

    if picked.is_empty() {
        picked = entries.iter().take(max_days).cloned().collect();
    }

    picked
}

fn is_midday(entry: &ForecastEntry) -> bool {
    let time = entry.timestamp.time();
    time.hour() == 12 && time.minute() == 0 && time.second() == 0
}
