//! Date, time and timestamp generators.
//!
//! Dates render as `YYYY-MM-DD`; timestamps render as ISO 8601 in UTC with
//! millisecond precision (`2023-04-05T12:34:56.789Z`).

use chrono::{DateTime, Days, NaiveDate, SecondsFormat, Utc};
use synth_core::{FieldType, RandomSource, Value};

/// Date format used by every date-valued output.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Generate a temporal-category value. Other types yield null.
pub fn generate<R: RandomSource>(field_type: FieldType, rng: &mut R) -> Value {
    match field_type {
        FieldType::Date => {
            let date = random_date_between(rng, ymd(2015, 1, 1), ymd(2025, 12, 31));
            Value::String(format_date(date))
        }
        FieldType::Timestamp => Value::String(timestamp(rng)),
        FieldType::Time => {
            let h = rng.next_int(0, 23);
            let m = rng.next_int(0, 59);
            let s = rng.next_int(0, 59);
            Value::String(format!("{h:02}:{m:02}:{s:02}"))
        }
        _ => Value::Null,
    }
}

/// Birth date for an adult aged roughly 18 to 85.
pub fn date_of_birth<R: RandomSource>(rng: &mut R) -> String {
    format_date(random_date_between(rng, ymd(1940, 1, 1), ymd(2006, 12, 31)))
}

/// Random ISO 8601 timestamp between 2015 and the end of 2025.
pub fn timestamp<R: RandomSource>(rng: &mut R) -> String {
    let start = to_millis(ymd(2015, 1, 1));
    let end = to_millis(ymd(2025, 12, 31));
    let ms = rng.next_int(start, end);
    DateTime::<Utc>::from_timestamp_millis(ms)
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Uniform date in `[start, end]` (bounds swapped if reversed). One draw.
pub fn random_date_between<R: RandomSource>(
    rng: &mut R,
    start: NaiveDate,
    end: NaiveDate,
) -> NaiveDate {
    let (lo, hi) = if end < start { (end, start) } else { (start, end) };
    let span = (hi - lo).num_days();
    let offset = rng.next_int(0, span) as u64;
    lo.checked_add_days(Days::new(offset)).unwrap_or(lo)
}

/// Parse a date in `YYYY-MM-DD` or RFC 3339 form.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

/// Render a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Milliseconds since the Unix epoch at midnight UTC of `date`.
pub fn to_millis(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .unwrap_or_default()
        .and_utc()
        .timestamp_millis()
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
