//! Data records returned by the imageboard API.
//!
//! All records are immutable once fetched. The serde attributes follow the
//! wire names used by the remote service (`num`, `files`, `fullname`).

mod board;
mod post;
mod thread;

pub use board::Board;
pub use post::{Image, Post};
pub use thread::Thread;

use serde::{Deserialize, Deserializer};

/// Deserialize an id that may arrive as either a JSON string or an integer.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// Deserialize a post number that may arrive as either a JSON string or an integer.
pub(crate) fn deserialize_post_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = deserialize_id(deserializer)?;
    raw.trim()
        .parse::<u64>()
        .map_err(|_| D::Error::custom(format!("invalid post number: {raw:?}")))
}

/// Treat `null` as an empty string.
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Treat `null` as an empty list.
pub(crate) fn deserialize_nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct IdHolder {
        #[serde(deserialize_with = "deserialize_id")]
        id: String,
    }

    #[derive(Debug, Deserialize)]
    struct NumHolder {
        #[serde(deserialize_with = "deserialize_post_number")]
        num: u64,
    }

    #[test]
    fn test_deserialize_id_from_string_and_number() {
        let holder: IdHolder = serde_json::from_str(r#"{"id":"12345"}"#).unwrap();
        assert_eq!(holder.id, "12345");

        let holder: IdHolder = serde_json::from_str(r#"{"id":12345}"#).unwrap();
        assert_eq!(holder.id, "12345");
    }

    #[test]
    fn test_deserialize_post_number() {
        let holder: NumHolder = serde_json::from_str(r#"{"num":"42"}"#).unwrap();
        assert_eq!(holder.num, 42);

        let holder: NumHolder = serde_json::from_str(r#"{"num":42}"#).unwrap();
        assert_eq!(holder.num, 42);
    }

    #[test]
    fn test_deserialize_post_number_rejects_garbage() {
        let result: Result<NumHolder, _> = serde_json::from_str(r#"{"num":"abc"}"#);
        assert!(result.is_err());

        let result: Result<NumHolder, _> = serde_json::from_str(r#"{"num":-3}"#);
        assert!(result.is_err());
    }
}
