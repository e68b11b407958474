use chrono::{DateTime, Utc};

/// Seconds since the Unix epoch with microsecond precision.
pub fn epoch_seconds(at: DateTime<Utc>) -> f64 {
    at.timestamp_micros() as f64 / 1_000_000.0
}

pub fn now_epoch_seconds() -> f64 {
    epoch_seconds(Utc::now())
}
