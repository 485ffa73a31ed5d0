use chrono::{DateTime, Local, NaiveDateTime, Utc};

/// Parses the timestamp shapes the API is known to send: RFC 3339 (with or
/// without fractional seconds), a trailing `Z` without seconds, or a naive
/// datetime that is taken to be UTC.
pub fn parse_flexible_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = s.strip_suffix('Z').unwrap_or(s);
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(naive, fmt).ok())
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

pub fn deserialize_flexible_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = serde::Deserialize::deserialize(deserializer)?;

    parse_flexible_datetime(&s)
        .ok_or_else(|| serde::de::Error::custom(format!("Failed to parse datetime '{s}'")))
}

/// Same as [`deserialize_flexible_datetime`] but tolerates `null`.
pub fn deserialize_optional_datetime<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = serde::Deserialize::deserialize(deserializer)?;

    s.map(|s| {
        parse_flexible_datetime(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("Failed to parse datetime '{s}'")))
    })
    .transpose()
}

/// Local-time rendering for "last updated" captions
pub fn format_local(at: Option<DateTime<Utc>>) -> String {
    at.map_or_else(
        || "Unknown".to_string(),
        |at| at.with_timezone(&Local).format("%d/%m/%Y, %H:%M:%S").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parses_rfc3339_with_millis() {
        let dt = parse_flexible_datetime("2025-03-01T10:15:30.250Z").unwrap();
        assert_eq!(
            dt,
            Utc.with_ymd_and_hms(2025, 3, 1, 10, 15, 30).unwrap()
                + chrono::Duration::milliseconds(250)
        );
    }

    #[test]
    fn test_parses_without_seconds() {
        let dt = parse_flexible_datetime("2026-01-12T19:30Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 1, 12, 19, 30, 0).unwrap());
    }

    #[test]
    fn test_parses_naive_as_utc() {
        let dt = parse_flexible_datetime("2026-01-12T19:30:05").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 1, 12, 19, 30, 5).unwrap());
    }

    #[test]
    fn test_format_missing_timestamp() {
        assert_eq!(format_local(None), "Unknown");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_flexible_datetime("yesterday").is_none());
        assert!(parse_flexible_datetime("").is_none());
    }
}
