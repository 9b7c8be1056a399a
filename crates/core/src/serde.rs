//! Serde helper functions for form-shaped JSON payloads.
//!
//! The console posts every select as a string, so an untouched select arrives
//! as `""`. These helpers treat empty strings as `None` for optional fields.

use chrono::NaiveTime;
use serde::de::{value::StringDeserializer, DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serializer};

/// Wire format for time-of-day values.
pub const TIME_FORMAT: &str = "%H:%M";

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize an optional `HH:MM` NaiveTime, treating empty strings as None.
pub fn deserialize_optional_time<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => parse_time(&s)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Serialize an optional NaiveTime as `HH:MM`.
pub fn serialize_optional_time<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match time {
        Some(t) => serializer.serialize_some(&t.format(TIME_FORMAT).to_string()),
        None => serializer.serialize_none(),
    }
}

/// Deserialize an optional string-backed enum, treating empty strings as None.
pub fn deserialize_optional_enum<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => {
            let de: StringDeserializer<D::Error> = s.into_deserializer();
            T::deserialize(de).map(Some)
        }
        _ => Ok(None),
    }
}

/// Parse `HH:MM`. Seconds are rejected since they cannot be stored.
pub fn parse_time(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s.trim(), TIME_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
    enum Colour {
        #[serde(rename = "Deep Red")]
        DeepRed,
        Blue,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        string_field: Option<String>,
        #[serde(default, deserialize_with = "deserialize_optional_time")]
        time_field: Option<NaiveTime>,
        #[serde(default, deserialize_with = "deserialize_optional_enum")]
        enum_field: Option<Colour>,
    }

    #[derive(Serialize)]
    struct TimeOut {
        #[serde(serialize_with = "serialize_optional_time")]
        at: Option<NaiveTime>,
    }

    #[test]
    fn test_deserialize_optional_string_empty() {
        let result: TestStruct = serde_json::from_str(r#"{"string_field": ""}"#).unwrap();
        assert_eq!(result.string_field, None);
    }

    #[test]
    fn test_deserialize_optional_string_whitespace() {
        let result: TestStruct = serde_json::from_str(r#"{"string_field": "   "}"#).unwrap();
        assert_eq!(result.string_field, None);
    }

    #[test]
    fn test_deserialize_optional_string_value() {
        let result: TestStruct = serde_json::from_str(r#"{"string_field": "Mono CCY"}"#).unwrap();
        assert_eq!(result.string_field, Some("Mono CCY".to_string()));
    }

    #[test]
    fn test_missing_fields_default_to_none() {
        let result: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(
            result,
            TestStruct {
                string_field: None,
                time_field: None,
                enum_field: None,
            }
        );
    }

    #[test]
    fn test_deserialize_optional_time_hh_mm() {
        let result: TestStruct = serde_json::from_str(r#"{"time_field": "09:30"}"#).unwrap();
        assert_eq!(result.time_field, NaiveTime::from_hms_opt(9, 30, 0));
    }

    #[test]
    fn test_deserialize_optional_time_rejects_seconds() {
        let result: Result<TestStruct, _> =
            serde_json::from_str(r#"{"time_field": "17:00:30"}"#);
        assert!(result.is_err());

        assert!(parse_time("17:00:00").is_err());
        assert_eq!(parse_time(" 17:00 ").unwrap(), NaiveTime::from_hms_opt(17, 0, 0).unwrap());
    }

    #[test]
    fn test_deserialize_optional_time_invalid() {
        let result: Result<TestStruct, _> = serde_json::from_str(r#"{"time_field": "25:99"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_optional_enum_renamed_variant() {
        let result: TestStruct = serde_json::from_str(r#"{"enum_field": "Deep Red"}"#).unwrap();
        assert_eq!(result.enum_field, Some(Colour::DeepRed));
    }

    #[test]
    fn test_deserialize_optional_enum_empty() {
        let result: TestStruct = serde_json::from_str(r#"{"enum_field": ""}"#).unwrap();
        assert_eq!(result.enum_field, None);
    }

    #[test]
    fn test_deserialize_optional_enum_unknown_value() {
        let result: Result<TestStruct, _> = serde_json::from_str(r#"{"enum_field": "Green"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_optional_time_hh_mm() {
        let json = serde_json::to_string(&TimeOut {
            at: NaiveTime::from_hms_opt(8, 5, 0),
        })
        .unwrap();
        assert_eq!(json, r#"{"at":"08:05"}"#);

        let json = serde_json::to_string(&TimeOut { at: None }).unwrap();
        assert_eq!(json, r#"{"at":null}"#);
    }
}
