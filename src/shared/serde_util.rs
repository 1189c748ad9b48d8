//! Custom serde helpers for backend wire formats.

/// Serializes `DateTime<Utc>` as RFC 3339 with millisecond precision and a
/// `Z` suffix (`2025-05-08T00:00:00.000Z`), the form the backend expects in
/// request bodies.
pub mod timestamp_millis_z {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::Serializer;

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(value))
    }

    pub fn format(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Deserializes a JSON `null` or missing array as an empty `Vec`.
pub mod null_as_empty {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_timestamp_millis_z_format() {
        let t = Utc.with_ymd_and_hms(2025, 5, 8, 0, 0, 0).unwrap();
        assert_eq!(timestamp_millis_z::format(&t), "2025-05-08T00:00:00.000Z");
    }
}
