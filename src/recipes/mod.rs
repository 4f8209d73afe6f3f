//! Recipes, the only resource this service knows about.

use serde::{Deserialize, Serialize};

mod id;
pub use id::RecipeId;

pub mod store;
pub use store::{InMemoryRecipeStore, MySqlRecipeStore, RecipeStore, StoreError, StoreResult};

pub mod http;


/// A stored recipe.
///
/// Text fields are `None` if the recipe was submitted without them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Recipe
{
	pub id: RecipeId,
	pub title: Option<String>,
	pub ingredients: Option<String>,
	pub instructions: Option<String>,
	pub meal_type: Option<String>,
	pub servings: i32,

	/// Free-form, e.g. "20 min".
	pub cooking_time: Option<String>,
}

/// Request payload for creating a new [`Recipe`].
///
/// Every field is optional. Missing or `null` text stays absent, while
/// `servings` falls back to `0`. Numbers and booleans sent for text fields are
/// stored as text, and `servings` may be sent as a numeric string. Unknown
/// fields, including `id`, are ignored, so clients cannot choose the
/// identifier of the recipe they submit.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewRecipe
{
	#[serde(deserialize_with = "crate::util::serde::deserialize_scalar_as_string")]
	pub title: Option<String>,

	#[serde(deserialize_with = "crate::util::serde::deserialize_scalar_as_string")]
	pub ingredients: Option<String>,

	#[serde(deserialize_with = "crate::util::serde::deserialize_scalar_as_string")]
	pub instructions: Option<String>,

	#[serde(deserialize_with = "crate::util::serde::deserialize_scalar_as_string")]
	pub meal_type: Option<String>,

	#[serde(deserialize_with = "crate::util::serde::deserialize_lenient_i32")]
	pub servings: i32,

	#[serde(deserialize_with = "crate::util::serde::deserialize_scalar_as_string")]
	pub cooking_time: Option<String>,
}

impl NewRecipe
{
	/// Turns this payload into a [`Recipe`] with the given `id`.
	pub fn with_id(self, id: RecipeId) -> Recipe
	{
		let Self { title, ingredients, instructions, meal_type, servings, cooking_time } = self;

		Recipe { id, title, ingredients, instructions, meal_type, servings, cooking_time }
	}
}
