//! Utilities for unit tests.

use axum::Router;
use axum::body::{Body, Bytes};
use http::{HeaderMap, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub(crate) type Error = color_eyre::Report;
pub(crate) type Result<T = (), E = Error> = std::result::Result<T, E>;

/// What we care about in a response.
#[derive(Debug)]
pub(crate) struct TestResponse
{
	pub(crate) status: StatusCode,
	pub(crate) headers: HeaderMap,
	pub(crate) body: Bytes,
}

impl TestResponse
{
	/// Deserializes the body as JSON.
	pub(crate) fn json<T>(&self) -> Result<T>
	where
		T: for<'de> serde::Deserialize<'de>,
	{
		serde_json::from_slice(&self.body[..]).map_err(Into::into)
	}
}

/// Sends a single `request` through `router`.
pub(crate) async fn send(router: &Router, request: Request<Body>) -> Result<TestResponse>
{
	let response = router.clone().oneshot(request).await?;
	let (parts, body) = response.into_parts();
	let body = body.collect().await?.to_bytes();

	Ok(TestResponse { status: parts.status, headers: parts.headers, body })
}

/// Builds a `POST` request with a JSON body.
pub(crate) fn post_json(uri: &str, body: impl Into<Body>) -> Result<Request<Body>>
{
	Request::post(uri)
		.header(http::header::CONTENT_TYPE, "application/json")
		.body(body.into())
		.map_err(Into::into)
}

/// Builds a `GET` request.
pub(crate) fn get(uri: &str) -> Result<Request<Body>>
{
	Request::get(uri).body(Body::empty()).map_err(Into::into)
}
