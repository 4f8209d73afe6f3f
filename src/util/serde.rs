//! Helper functions for [`serde`].
//!
//! Recipe payloads come from browsers and, indirectly, from language models,
//! so scalar fields are accepted in whichever JSON type they happen to arrive
//! in. Combine these with `#[serde(default)]` so that missing fields are
//! covered as well.

use std::fmt;

use serde::Deserializer;
use serde::de::{self, Unexpected};

/// Deserializes an `i32` from an integer or a string containing one.
///
/// `null` becomes `0`.
pub(crate) fn deserialize_lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
	D: Deserializer<'de>,
{
	struct LenientI32Visitor;

	impl<'de> de::Visitor<'de> for LenientI32Visitor
	{
		type Value = i32;

		fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
		{
			fmt.write_str("an integer, a string containing an integer, or null")
		}

		fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E>
		{
			i32::try_from(value).map_err(|_| E::invalid_value(Unexpected::Signed(value), &self))
		}

		fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E>
		{
			i32::try_from(value).map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
		}

		fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E>
		{
			value
				.trim()
				.parse::<i32>()
				.map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
		}

		fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E>
		{
			Ok(0)
		}

		fn visit_none<E: de::Error>(self) -> Result<Self::Value, E>
		{
			Ok(0)
		}

		fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
		where
			D: Deserializer<'de>,
		{
			deserializer.deserialize_any(self)
		}
	}

	deserializer.deserialize_any(LenientI32Visitor)
}

/// Deserializes an optional string, rendering numbers and booleans as text.
///
/// `null` stays `None`; arrays and objects are rejected.
pub(crate) fn deserialize_scalar_as_string<'de, D>(
	deserializer: D,
) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	struct ScalarVisitor;

	impl<'de> de::Visitor<'de> for ScalarVisitor
	{
		type Value = Option<String>;

		fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
		{
			fmt.write_str("a string, a number, a boolean, or null")
		}

		fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E>
		{
			Ok(Some(value.to_owned()))
		}

		fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E>
		{
			Ok(Some(value))
		}

		fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E>
		{
			Ok(Some(value.to_string()))
		}

		fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E>
		{
			Ok(Some(value.to_string()))
		}

		fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E>
		{
			Ok(Some(value.to_string()))
		}

		fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E>
		{
			Ok(Some(value.to_string()))
		}

		fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E>
		{
			Ok(None)
		}

		fn visit_none<E: de::Error>(self) -> Result<Self::Value, E>
		{
			Ok(None)
		}

		fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
		where
			D: Deserializer<'de>,
		{
			deserializer.deserialize_any(self)
		}
	}

	deserializer.deserialize_any(ScalarVisitor)
}

#[cfg(test)]
mod tests
{
	use serde::Deserialize;

	#[derive(Debug, Default, Deserialize)]
	#[serde(default)]
	struct Payload
	{
		#[serde(deserialize_with = "super::deserialize_scalar_as_string")]
		name: Option<String>,

		#[serde(deserialize_with = "super::deserialize_lenient_i32")]
		count: i32,
	}

	fn parse(json: &str) -> serde_json::Result<Payload>
	{
		serde_json::from_str(json)
	}

	#[test]
	fn null_and_missing_values() -> serde_json::Result<()>
	{
		let payload = parse(r#"{"name":null,"count":null}"#)?;

		assert_eq!(payload.name, None);
		assert_eq!(payload.count, 0);

		let payload = parse("{}")?;

		assert_eq!(payload.name, None);
		assert_eq!(payload.count, 0);

		Ok(())
	}

	#[test]
	fn present_values_are_kept() -> serde_json::Result<()>
	{
		let payload = parse(r#"{"name":"soup","count":-3}"#)?;

		assert_eq!(payload.name.as_deref(), Some("soup"));
		assert_eq!(payload.count, -3);

		Ok(())
	}

	#[test]
	fn scalars_are_coerced() -> serde_json::Result<()>
	{
		let payload = parse(r#"{"name":15,"count":" 2 "}"#)?;

		assert_eq!(payload.name.as_deref(), Some("15"));
		assert_eq!(payload.count, 2);

		assert_eq!(parse(r#"{"name":true}"#)?.name.as_deref(), Some("true"));
		assert_eq!(parse(r#"{"name":2.5}"#)?.name.as_deref(), Some("2.5"));

		Ok(())
	}

	#[test]
	fn non_numeric_counts_are_rejected()
	{
		for json in [r#"{"count":"three"}"#, r#"{"count":2.5}"#, r#"{"count":4294967296}"#] {
			assert!(parse(json).is_err_and(|err| err.is_data()), "{json} should be rejected");
		}
	}

	#[test]
	fn structured_names_are_rejected()
	{
		for json in [r#"{"name":["soup"]}"#, r#"{"name":{"en":"soup"}}"#] {
			assert!(parse(json).is_err_and(|err| err.is_data()), "{json} should be rejected");
		}
	}
}
