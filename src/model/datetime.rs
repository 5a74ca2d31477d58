//! Serde helpers for timestamps in the `yyyy-MM-ddTHH:mm:ss` wire format.
//!
//! Use with `#[serde(with = "crate::model::datetime")]` on `NaiveDateTime` fields.

use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Deserializer, Serializer};

/// `chrono` format string of every timestamp on the wire.
pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.format(FORMAT).to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&value, FORMAT).map_err(serde::de::Error::custom)
}

/// Current local time truncated to whole seconds.
///
/// Every "now" comparison and every stored timestamp goes through this so values written
/// and values compared have the same precision.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Stamp {
        #[serde(with = "super")]
        at: NaiveDateTime,
    }

    #[test]
    fn formats_without_fraction_or_zone() {
        let at = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();

        let json = serde_json::to_string(&Stamp { at }).unwrap();

        assert_eq!(json, r#"{"at":"2025-01-01T10:00:00"}"#);
    }

    #[test]
    fn rejects_other_patterns() {
        let result = serde_json::from_str::<Stamp>(r#"{"at":"2025-01-01 10:00"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn now_has_no_subsecond_part() {
        assert_eq!(now().and_utc().timestamp_subsec_nanos(), 0);
    }
}
