use sqlx::MySqlPool;

use super::{RecipeStore, StoreResult};
use crate::recipes::{NewRecipe, Recipe, RecipeId};

/// A [`RecipeStore`] backed by the `recipes` table of a MySQL database.
///
/// The schema is created by the migrations in `migrations/`, which
/// [`database::connect()`] applies.
///
/// [`database::connect()`]: crate::database::connect()
#[derive(Debug, Clone)]
pub struct MySqlRecipeStore
{
	database: MySqlPool,
}

impl MySqlRecipeStore
{
	/// Creates a new [`MySqlRecipeStore`].
	pub fn new(database: MySqlPool) -> Self
	{
		Self { database }
	}
}

impl RecipeStore for MySqlRecipeStore
{
	#[tracing::instrument(skip_all, fields(recipe.title = ?recipe.title), err(level = "debug"))]
	async fn create(&self, recipe: NewRecipe) -> StoreResult<Recipe>
	{
		let query_result = sqlx::query(
			"INSERT INTO recipes (title, ingredients, instructions, meal_type, servings, cooking_time)
			 VALUES (?, ?, ?, ?, ?, ?)",
		)
		.bind(&recipe.title)
		.bind(&recipe.ingredients)
		.bind(&recipe.instructions)
		.bind(&recipe.meal_type)
		.bind(recipe.servings)
		.bind(&recipe.cooking_time)
		.execute(&self.database)
		.await?;

		let recipe_id = RecipeId::from(query_result.last_insert_id());

		tracing::info! {
			target: "savour_api::audit_log",
			%recipe_id,
			"created recipe",
		};

		Ok(recipe.with_id(recipe_id))
	}

	#[tracing::instrument(skip(self), err(level = "debug"))]
	async fn list_all(&self) -> StoreResult<Vec<Recipe>>
	{
		sqlx::query_as::<_, Recipe>(
			"SELECT id, title, ingredients, instructions, meal_type, servings, cooking_time
			 FROM recipes
			 ORDER BY id",
		)
		.fetch_all(&self.database)
		.await
		.map_err(Into::into)
	}

	#[tracing::instrument(skip(self), err(level = "debug"))]
	async fn get_by_id(&self, recipe_id: RecipeId) -> StoreResult<Option<Recipe>>
	{
		sqlx::query_as::<_, Recipe>(
			"SELECT id, title, ingredients, instructions, meal_type, servings, cooking_time
			 FROM recipes
			 WHERE id = ?",
		)
		.bind(recipe_id)
		.fetch_optional(&self.database)
		.await
		.map_err(Into::into)
	}
}

#[cfg(test)]
mod tests
{
	use sqlx::MySqlPool;

	use super::*;
	use crate::testing;

	fn soup(title: &str) -> NewRecipe
	{
		NewRecipe {
			title: Some(title.to_owned()),
			ingredients: Some(String::from("water, salt, ").repeat(10_000)),
			instructions: Some(String::from("simmer")),
			meal_type: Some(String::from("lunch")),
			servings: -1,
			cooking_time: Some(String::from("forever")),
		}
	}

	#[sqlx::test(migrations = "./migrations")]
	#[ignore = "requires a MySQL server at `DATABASE_URL`"]
	async fn empty_table_lists_nothing(database: MySqlPool) -> testing::Result
	{
		let store = MySqlRecipeStore::new(database);

		assert!(store.list_all().await?.is_empty());

		Ok(())
	}

	#[sqlx::test(migrations = "./migrations")]
	#[ignore = "requires a MySQL server at `DATABASE_URL`"]
	async fn create_then_list(database: MySqlPool) -> testing::Result
	{
		let store = MySqlRecipeStore::new(database);
		let created = store.create(soup("Soup")).await?;

		assert_eq!(created, soup("Soup").with_id(created.id));
		assert_eq!(store.list_all().await?, [created.clone()]);
		assert_eq!(store.get_by_id(created.id).await?, Some(created));

		Ok(())
	}

	#[sqlx::test(migrations = "./migrations")]
	#[ignore = "requires a MySQL server at `DATABASE_URL`"]
	async fn absent_text_is_stored_as_null(database: MySqlPool) -> testing::Result
	{
		let store = MySqlRecipeStore::new(database);
		let created = store.create(NewRecipe::default()).await?;

		assert_eq!(created, NewRecipe::default().with_id(created.id));
		assert_eq!(store.get_by_id(created.id).await?, Some(created));

		Ok(())
	}

	#[sqlx::test(migrations = "./migrations")]
	#[ignore = "requires a MySQL server at `DATABASE_URL`"]
	async fn identical_payloads_get_distinct_ids(database: MySqlPool) -> testing::Result
	{
		let store = MySqlRecipeStore::new(database);
		let first = store.create(soup("")).await?;
		let second = store.create(soup("")).await?;

		assert_ne!(first.id, second.id);
		assert_eq!(store.list_all().await?.len(), 2);

		Ok(())
	}
}
