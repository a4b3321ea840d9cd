use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

const AWARE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A timestamp as it arrives from a caller, with or without an offset.
///
/// Accepts RFC 3339 as well as a space in place of `T` and readings without
/// seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum InputTimestamp {
    Aware(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl InputTimestamp {
    /// Drops any offset and keeps the wall-clock reading; no conversion to UTC.
    pub fn normalize(self) -> NaiveDateTime {
        match self {
            InputTimestamp::Aware(dt) => dt.naive_local(),
            InputTimestamp::Naive(dt) => dt,
        }
    }
}

impl FromStr for InputTimestamp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        // Relaxed RFC 3339: `T` or space, `Z` or numeric offset.
        if let Ok(dt) = s.parse::<DateTime<FixedOffset>>() {
            return Ok(InputTimestamp::Aware(dt));
        }

        let with_offset = match s.strip_suffix(['Z', 'z']) {
            Some(rest) => format!("{}+00:00", rest),
            None => s.to_string(),
        };
        for format in AWARE_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(&with_offset, format) {
                return Ok(InputTimestamp::Aware(dt));
            }
        }

        for format in NAIVE_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(InputTimestamp::Naive(dt));
            }
        }

        Err(format!("invalid timestamp '{}'", s))
    }
}

impl<'de> Deserialize<'de> for InputTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
