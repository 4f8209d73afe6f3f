//! Persistence for [`Recipe`]s.
//!
//! [`RecipeStore`] lists exactly the operations the API needs. New operations
//! should be added here deliberately, together with an implementation for
//! every backend.

use std::future::Future;

use super::{NewRecipe, Recipe, RecipeId};

mod error;
pub use error::{StoreError, StoreResult};

mod memory;
pub use memory::InMemoryRecipeStore;

mod mysql;
pub use mysql::MySqlRecipeStore;

/// A durable home for recipes.
///
/// Stores are constructed once at startup and handed to the HTTP layer as
/// state, so they must be cheap to clone and safe to use from many tasks at
/// once. Every operation is a single, independently atomic unit of work.
pub trait RecipeStore: Clone + Send + Sync + 'static
{
	/// Persists `recipe` and returns it together with its newly assigned ID.
	fn create(&self, recipe: NewRecipe) -> impl Future<Output = StoreResult<Recipe>> + Send;

	/// Returns every stored recipe.
	///
	/// Callers must not rely on any particular order.
	fn list_all(&self) -> impl Future<Output = StoreResult<Vec<Recipe>>> + Send;

	/// Looks up a single recipe by its ID.
	fn get_by_id(
		&self,
		recipe_id: RecipeId,
	) -> impl Future<Output = StoreResult<Option<Recipe>>> + Send;
}
