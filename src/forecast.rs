//! Daily sampling of the forecast series and date labels

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{ForecastEntry, ForecastSeries};

/// Three-hour samples per day in the backend's forecast feed.
pub const DEFAULT_STRIDE: usize = 8;

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const NOON_MINUTES: i64 = 12 * 60;

/// How forecast samples are reduced to one representative per day
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SamplingStrategy {
    /// Take every `every`-th entry starting at index 0
    Stride { every: usize },
    /// Group by calendar date and take the entry closest to 12:00
    Midday,
}

impl Default for SamplingStrategy {
    fn default() -> Self {
        SamplingStrategy::Stride {
            every: DEFAULT_STRIDE,
        }
    }
}

impl SamplingStrategy {
    /// Switch between stride and midday sampling.
    pub fn toggle(self, stride: usize) -> Self {
        match self {
            SamplingStrategy::Stride { .. } => SamplingStrategy::Midday,
            SamplingStrategy::Midday => SamplingStrategy::Stride {
                every: stride.max(1),
            },
        }
    }

    pub fn label(self) -> String {
        match self {
            SamplingStrategy::Stride { every } => format!("every {every}"),
            SamplingStrategy::Midday => "midday".to_string(),
        }
    }
}

/// Pick one entry per day according to `strategy`, preserving series order.
pub fn daily_samples(series: &ForecastSeries, strategy: SamplingStrategy) -> Vec<&ForecastEntry> {
    match strategy {
        SamplingStrategy::Stride { every } => series.entries.iter().step_by(every.max(1)).collect(),
        SamplingStrategy::Midday => midday_samples(&series.entries),
    }
}

fn midday_samples(entries: &[ForecastEntry]) -> Vec<&ForecastEntry> {
    // (date, best entry so far, minutes away from noon)
    let mut days: Vec<(NaiveDate, &ForecastEntry, i64)> = Vec::new();

    for entry in entries {
        let Some(at) = parse_timestamp(&entry.timestamp) else {
            continue;
        };
        let minutes = i64::from(at.hour()) * 60 + i64::from(at.minute());
        let distance = (minutes - NOON_MINUTES).abs();

        match days.iter_mut().find(|(date, _, _)| *date == at.date()) {
            Some(day) if distance < day.2 => {
                day.1 = entry;
                day.2 = distance;
            }
            Some(_) => {}
            None => days.push((at.date(), entry, distance)),
        }
    }

    days.into_iter().map(|(_, entry, _)| entry).collect()
}

/// Parse a backend `dt_txt` value. Date-only values are taken as midnight.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()?
                .and_hms_opt(0, 0, 0)
        })
}

/// Short card label, e.g. `Mon, Jan 1`. Unparseable timestamps are shown as-is.
pub fn day_label(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(at) => at.format("%a, %b %-d").to_string(),
        None => raw.to_string(),
    }
}
