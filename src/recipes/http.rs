//! HTTP handlers for recipes.

use axum::extract::State;
use axum::{Router, routing};

use super::{NewRecipe, Recipe, RecipeStore};
use crate::http::Result;
use crate::http::json::Json;

/// Routes for creating and listing recipes, backed by `store`.
pub fn router<S: RecipeStore>(store: S) -> Router
{
	Router::new()
		.route("/api/recipes/save", routing::post(save::<S>))
		.route("/api/recipes/all", routing::get(get_all::<S>))
		.with_state(store)
}

/// Saves a new recipe and returns it with its assigned ID.
async fn save<S: RecipeStore>(
	State(store): State<S>,
	Json(recipe): Json<NewRecipe>,
) -> Result<Json<Recipe>>
{
	let recipe = store.create(recipe).await?;

	Ok(Json(recipe))
}

/// Returns every saved recipe.
async fn get_all<S: RecipeStore>(State(store): State<S>) -> Result<Json<Vec<Recipe>>>
{
	let recipes = store.list_all().await?;

	Ok(Json(recipes))
}
