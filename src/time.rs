//! Timestamp normalization for time-series axes.
//!
//! The analytics backend does not encode daylight-saving transitions reliably, so
//! grouping timestamps are nudged by one hour before being turned into `MM/DD`
//! labels. The correction is narrow on purpose: it targets the North American /
//! European rule set (standard time in January, transition in March) and is not a
//! general timezone library.

use chrono::{
    DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc,
};

/// Label format for time-series categories.
pub const MONTH_DAY: &str = "%m/%d";

/// Normalize in the process' local timezone.
pub fn normalize_timestamp(iso: &str) -> Option<DateTime<Local>> {
    normalize_timestamp_in(iso, &Local)
}

/// Normalize an ISO-8601 timestamp as seen from `tz`.
///
/// Two independent checks may each replace the instant with `instant + 1h`:
/// 1. `instant + 1h` falls on the March transition day of the instant's year.
/// 2. The offset in effect (after check 1) equals the offset of the fixed January
///    reference instant, i.e. the zone is in standard time.
///
/// Both assign the same `instant + 1h` computed from the parsed input, so when both
/// fire the shift is still one hour.
///
/// Returns `None` when the input cannot be parsed.
pub fn normalize_timestamp_in<Tz: TimeZone>(iso: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let date = parse_in(iso, tz)?;
    let plus_one_hour = date.clone() + TimeDelta::hours(1);

    let mut out = date.clone();
    if march_transition_day(date.year()) == Some(plus_one_hour.date_naive()) {
        out = plus_one_hour.clone();
    }

    let january = Utc
        .with_ymd_and_hms(2023, 1, 1, 0, 0, 0)
        .single()?
        .with_timezone(tz);
    let in_daylight_time =
        out.offset().fix().local_minus_utc() != january.offset().fix().local_minus_utc();
    if !in_daylight_time {
        out = plus_one_hour;
    }

    Some(out)
}

/// Normalize and render as `MM/DD`; `None` when the input cannot be parsed.
pub fn format_month_day(iso: &str) -> Option<String> {
    normalize_timestamp(iso).map(|dt| dt.format(MONTH_DAY).to_string())
}

/// The Sunday on or before March 15th.
///
/// This is the second Sunday of March except in years where March 1st is a Sunday,
/// where it lands on the third.
pub fn march_transition_day(year: i32) -> Option<NaiveDate> {
    let mid_march = NaiveDate::from_ymd_opt(year, 3, 15)?;
    let back = i64::from(mid_march.weekday().num_days_from_sunday());
    Some(mid_march - TimeDelta::days(back))
}

fn parse_in<Tz: TimeZone>(iso: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let iso = iso.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return Some(dt.with_timezone(tz));
    }
    // No offset: interpret as wall-clock time in `tz`.
    let naive = NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(iso, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;
    tz.from_local_datetime(&naive).earliest()
}
