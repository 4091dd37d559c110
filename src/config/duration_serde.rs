//! Serde helpers for human-readable durations in configuration.

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};
use std::{fmt, time::Duration};

/// Duration as seconds (number) or human-readable string ("10s", "1m30s")
pub mod duration {
    use super::*;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let duration_str = humantime::format_duration(*duration).to_string();
        serializer.serialize_str(&duration_str)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DurationVisitor;

        impl Visitor<'_> for DurationVisitor {
            type Value = Duration;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a duration as seconds (number) or human-readable string (e.g., '10s', '1m30s')")
            }

            fn visit_u64<E>(self, seconds: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Duration::from_secs(seconds))
            }

            fn visit_i64<E>(self, seconds: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                u64::try_from(seconds)
                    .map(Duration::from_secs)
                    .map_err(|_| de::Error::custom(format!("Negative duration: {seconds}")))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                humantime::parse_duration(value)
                    .map_err(|e| de::Error::custom(format!("Invalid duration '{value}': {e}")))
            }
        }

        deserializer.deserialize_any(DurationVisitor)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use std::time::Duration;

    #[derive(Debug, Serialize, Deserialize)]
    struct Timeouts {
        #[serde(with = "super::duration")]
        connect: Duration,
    }

    #[test]
    fn test_duration_accepts_strings_and_seconds() {
        let parsed: Timeouts = toml::from_str("connect = \"1m30s\"").unwrap();
        assert_eq!(parsed.connect, Duration::from_secs(90));

        let parsed: Timeouts = toml::from_str("connect = 15").unwrap();
        assert_eq!(parsed.connect, Duration::from_secs(15));
    }

    #[test]
    fn test_duration_rejects_garbage() {
        assert!(toml::from_str::<Timeouts>("connect = \"soon\"").is_err());
    }

    #[test]
    fn test_duration_serializes_human_readable() {
        let text = toml::to_string(&Timeouts {
            connect: Duration::from_secs(10),
        })
        .unwrap();
        assert_eq!(text.trim(), "connect = \"10s\"");
    }
}
