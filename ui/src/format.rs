use jiff::{Timestamp, civil, tz::TimeZone};

const DATE_FORMAT: &str = "%b %d, %Y";

/// Format a backend date for display in the viewer's time zone.
pub fn format_date(raw: Option<&str>) -> String {
    format_date_in(raw, &TimeZone::system())
}

/// Format a backend date in `tz`.
///
/// The backend emits naive UTC datetimes (`2024-03-01T10:00:00.123000`), but
/// offset-qualified timestamps and bare dates are accepted too. Anything else
/// is shown as-is.
pub fn format_date_in(raw: Option<&str>, tz: &TimeZone) -> String {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return "N/A".to_string();
    };

    if let Ok(ts) = raw.parse::<Timestamp>() {
        return ts.to_zoned(tz.clone()).strftime(DATE_FORMAT).to_string();
    }
    if let Ok(dt) = raw.parse::<civil::DateTime>() {
        if let Ok(utc) = dt.to_zoned(TimeZone::UTC) {
            return utc.with_time_zone(tz.clone()).strftime(DATE_FORMAT).to_string();
        }
    }
    if let Ok(date) = raw.parse::<civil::Date>() {
        return date.strftime(DATE_FORMAT).to_string();
    }

    raw.to_string()
}

/// `1234567` -> `1,234,567`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
