// ⏰ Temporal helpers - the clock every Expense timestamp comes from
//
// Timestamps are captured in UTC with microsecond precision and rendered as
// ISO 8601 with a space between date and time:
//
//     2024-01-05 10:30:00.123456+00:00

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// Rendering used for every exported timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f%:z";

/// Last instant handed out by `now_utc`, in microseconds since the epoch
static LAST_ISSUED_MICROS: AtomicI64 = AtomicI64::new(i64::MIN);

// ============================================================================
// CLOCK
// ============================================================================

/// Current UTC instant, truncated to microseconds
///
/// Never goes backwards within a process: if the wall clock regresses, the
/// last issued instant is returned again instead.
pub fn now_utc() -> DateTime<Utc> {
    let wall = Utc::now();
    let wall_micros = wall.timestamp_micros();

    let previous = LAST_ISSUED_MICROS.fetch_max(wall_micros, Ordering::SeqCst);
    let issued = previous.max(wall_micros);

    DateTime::from_timestamp_micros(issued).unwrap_or(wall)
}

/// Current UTC instant rendered with `TIMESTAMP_FORMAT`
pub fn now_utc_string() -> String {
    format_timestamp(&now_utc())
}

/// Render an instant the way expense records export it
pub fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

// ============================================================================
// TESTS
// ============================================================================
