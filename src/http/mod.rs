//! The HTTP server.
//!
//! [`router()`] wires the recipe routes to a [`RecipeStore`] and wraps them in
//! the middleware every request goes through.

use axum::Router;
use http::HeaderValue;
use tower::ServiceBuilder;

use crate::recipes::{self, RecipeStore};

mod error;
pub use error::{Error, Result};

pub mod json;
pub(crate) mod middleware;

/// The origin of the development front-end.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Builds the API's [`Router`] on top of the given `store`.
///
/// The store is moved into the router as state; it is the only thing the
/// handlers share.
///
/// - `allowed_origins` may make cross-origin requests (defaults to
///   [`DEFAULT_ALLOWED_ORIGIN`])
/// - `include_http_headers` records request & response headers in traces
#[bon::builder(finish_fn = build)]
pub fn router<S: RecipeStore>(
	#[builder(start_fn)] store: S,
	#[builder(default = vec![HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN)])]
	allowed_origins: Vec<HeaderValue>,
	#[builder(default)] include_http_headers: bool,
) -> Router
{
	with_middleware(recipes::http::router(store), allowed_origins, include_http_headers)
}

/// Wraps `routes` in the middleware every request goes through.
pub(crate) fn with_middleware(
	routes: Router,
	allowed_origins: Vec<HeaderValue>,
	include_http_headers: bool,
) -> Router
{
	let (set_request_id, propagate_request_id) = middleware::request_id::layers();

	routes.layer(
		ServiceBuilder::new()
			.layer(set_request_id)
			.layer(middleware::trace::layer(include_http_headers))
			.layer(propagate_request_id)
			.layer(middleware::cors::layer(allowed_origins))
			.layer(middleware::panic_handler::layer()),
	)
}
