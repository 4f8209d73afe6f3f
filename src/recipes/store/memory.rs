use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::{RecipeStore, StoreResult};
use crate::recipes::{NewRecipe, Recipe, RecipeId};

/// A [`RecipeStore`] that keeps everything in memory.
///
/// Useful for local development and tests; nothing survives a restart.
/// Clones share the same underlying data.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRecipeStore
{
	inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner
{
	/// The ID of the most recently created recipe (0 if there are none).
	last_id: u64,
	recipes: BTreeMap<RecipeId, Recipe>,
}

impl InMemoryRecipeStore
{
	/// Creates a new, empty store.
	pub fn new() -> Self
	{
		Self::default()
	}
}

impl RecipeStore for InMemoryRecipeStore
{
	#[tracing::instrument(level = "debug", skip_all, fields(recipe.title = ?recipe.title))]
	async fn create(&self, recipe: NewRecipe) -> StoreResult<Recipe>
	{
		let mut inner = self.inner.write().await;

		inner.last_id += 1;

		let recipe_id = RecipeId::from(inner.last_id);
		let recipe = recipe.with_id(recipe_id);

		inner.recipes.insert(recipe_id, recipe.clone());

		tracing::info! {
			target: "savour_api::audit_log",
			%recipe_id,
			"created recipe",
		};

		Ok(recipe)
	}

	#[tracing::instrument(level = "debug", skip(self))]
	async fn list_all(&self) -> StoreResult<Vec<Recipe>>
	{
		Ok(self.inner.read().await.recipes.values().cloned().collect())
	}

	#[tracing::instrument(level = "debug", skip(self))]
	async fn get_by_id(&self, recipe_id: RecipeId) -> StoreResult<Option<Recipe>>
	{
		Ok(self.inner.read().await.recipes.get(&recipe_id).cloned())
	}
}
