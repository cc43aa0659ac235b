//! Timestamp formatting shared by records and response envelopes.

use chrono::{DateTime, SecondsFormat, Utc};

/// Render `instant` as ISO-8601 UTC with a trailing `Z`.
///
/// Sub-second digits appear only when non-zero.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use profile_api::domain::to_iso8601;
///
/// let instant = Utc.with_ymd_and_hms(2023, 1, 15, 10, 30, 0).unwrap();
/// assert_eq!(to_iso8601(instant), "2023-01-15T10:30:00Z");
/// ```
#[must_use]
pub fn to_iso8601(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn keeps_fractional_seconds() {
        let instant = Utc
            .with_ymd_and_hms(2024, 5, 1, 8, 0, 0)
            .single()
            .and_then(|t| t.with_nanosecond(250_000_000))
            .expect("valid instant");
        assert_eq!(to_iso8601(instant), "2024-05-01T08:00:00.250Z");
    }
}
