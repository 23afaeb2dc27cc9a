use chrono::{DateTime, FixedOffset, Timelike};
use chrono_tz::Tz;

/// Client-supplied submission time, as sent by the browser (`toISOString`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmittedAt(DateTime<FixedOffset>);

impl SubmittedAt {
    pub fn parse(s: &str) -> Result<Self, String> {
        DateTime::parse_from_rfc3339(s.trim())
            .map(Self)
            .map_err(|e| format!("{} is not a valid ISO-8601 timestamp: {}", s, e))
    }

    /// Formats the timestamp the way the Greek locale prints date and time,
    /// e.g. `19/10/2026, 4:52:07 μ.μ.`, at the offset `zone` had on that date.
    pub fn to_greek_locale(&self, zone: Tz) -> String {
        let local = self.0.with_timezone(&zone);
        let meridiem = if local.hour() < 12 { "π.μ." } else { "μ.μ." };
        format!(
            "{}, {} {}",
            local.format("%-d/%-m/%Y"),
            local.format("%-I:%M:%S"),
            meridiem
        )
    }
}
