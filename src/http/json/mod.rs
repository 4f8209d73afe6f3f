//! A JSON extractor & response type.
//!
//! Unlike [`axum::Json`], rejections always carry our JSON error body, and
//! any body that fails to deserialize is a `400 Bad Request`.

mod rejection;

use std::fmt;

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use headers::HeaderMapExt;
use http::StatusCode;
use mime::Mime;
use serde::{Deserialize, Serialize};

pub use self::rejection::JsonRejection;

/// JSON request/response body.
#[derive(Debug)]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T>
{
	fn into_response(self) -> Response
	{
		match serde_json::to_vec(&self.0) {
			Ok(body) => {
				let mut response = Response::new(body.into());
				response.headers_mut().typed_insert(headers::ContentType::json());
				response
			},
			Err(error) => {
				tracing::error! {
					target: "savour_api::audit_log",
					%error,
					"failed to serialize response body",
				};

				let mut response = Response::new(r#"{"message":"internal server error"}"#.into());
				*response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
				response.headers_mut().typed_insert(headers::ContentType::json());
				response
			},
		}
	}
}

impl<T, S> FromRequest<S> for Json<T>
where
	T: for<'de> Deserialize<'de> + fmt::Debug,
	S: Send + Sync,
{
	type Rejection = JsonRejection<T>;

	#[tracing::instrument(level = "debug", skip_all, ret(level = "trace"), err(level = "debug"))]
	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection>
	{
		if !has_json_content_type(req.headers()) {
			return Err(JsonRejection::missing_content_type());
		}

		let body = Bytes::from_request(req, state).await?;

		serde_json::from_slice(&body[..])
			.map(Self)
			.map_err(JsonRejection::deserialize)
	}
}

#[tracing::instrument(level = "trace", ret(level = "trace"))]
fn has_json_content_type(headers: &http::HeaderMap) -> bool
{
	let Some(content_type) = headers.get(http::header::CONTENT_TYPE) else {
		tracing::debug!("request headers do not contain a `Content-Type` header");
		return false;
	};

	let Ok(content_type) = content_type.to_str() else {
		tracing::debug!("request headers contain a `Content-Type` header, but it's not UTF-8");
		return false;
	};

	let Ok(mime) = content_type.parse::<Mime>() else {
		tracing::debug!(
			"request headers contain a `Content-Type` header, but it's not a valid mime type"
		);
		return false;
	};

	mime.type_() == mime::APPLICATION
		&& (mime.subtype() == mime::JSON || mime.suffix() == Some(mime::JSON))
}

#[cfg(test)]
mod tests
{
	use http::HeaderValue;

	use super::*;

	fn headers(content_type: &'static str) -> http::HeaderMap
	{
		let mut headers = http::HeaderMap::new();
		headers.insert(http::header::CONTENT_TYPE, HeaderValue::from_static(content_type));
		headers
	}

	#[test]
	fn accepts_json_content_types()
	{
		assert!(has_json_content_type(&headers("application/json")));
		assert!(has_json_content_type(&headers("application/json; charset=utf-8")));
		assert!(has_json_content_type(&headers("application/problem+json")));
	}

	#[test]
	fn rejects_other_content_types()
	{
		assert!(!has_json_content_type(&http::HeaderMap::new()));
		assert!(!has_json_content_type(&headers("text/plain")));
		assert!(!has_json_content_type(&headers("application/x-www-form-urlencoded")));
		assert!(!has_json_content_type(&headers("not a mime type")));
	}
}
