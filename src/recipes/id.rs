use std::num::ParseIntError;
use std::str::FromStr;

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// The identifier the store assigns to a [`Recipe`] when it is created.
///
/// [`Recipe`]: super::Recipe
#[derive(
	Debug,
	Display,
	Clone,
	Copy,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	Hash,
	From,
	Into,
	Serialize,
	Deserialize,
	sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct RecipeId(u64);

impl FromStr for RecipeId
{
	type Err = ParseIntError;

	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		value.parse::<u64>().map(Self)
	}
}

#[cfg(test)]
mod tests
{
	use std::num::IntErrorKind;

	use super::*;

	#[test]
	fn parses_and_displays_as_plain_integer() -> Result<(), ParseIntError>
	{
		let id = "17".parse::<RecipeId>()?;

		assert_eq!(id, RecipeId::from(17));
		assert_eq!(id.to_string(), "17");
		assert_eq!(u64::from(id), 17);

		Ok(())
	}

	#[test]
	fn rejects_negative_ids()
	{
		assert!(
			"-1".parse::<RecipeId>()
				.is_err_and(|err| *err.kind() == IntErrorKind::InvalidDigit)
		);
	}
}
