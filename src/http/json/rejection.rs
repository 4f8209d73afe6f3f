use std::any::type_name;
use std::marker::PhantomData;

use axum::extract::rejection::BytesRejection;
use axum::response::{IntoResponse, Response};
use derive_more::{Debug, Display};
use http::StatusCode;

use crate::http::error::error_response;

/// Rejection for the [`Json`] extractor.
///
/// This is what clients see when they send a malformed request body.
///
/// [`Json`]: super::Json
#[derive(Debug, Display)]
#[display("failed to extract json body of type `{}`: {}", type_name::<T>(), inner)]
pub struct JsonRejection<T>
{
	inner: JsonRejectionInner,

	#[debug("{}", type_name::<T>())]
	ty: PhantomData<T>,
}

#[derive(Debug, Display)]
enum JsonRejectionInner
{
	#[display("missing `Content-Type: application/json` header")]
	MissingContentType,
	BufferBody(BytesRejection),
	Deserialize(serde_json::Error),
}

impl<T> JsonRejection<T>
{
	pub(super) fn missing_content_type() -> Self
	{
		Self { inner: JsonRejectionInner::MissingContentType, ty: PhantomData }
	}

	pub(super) fn deserialize(error: serde_json::Error) -> Self
	{
		Self { inner: JsonRejectionInner::Deserialize(error), ty: PhantomData }
	}

	/// Returns the status code clients will see for this rejection.
	pub fn status(&self) -> StatusCode
	{
		match &self.inner {
			JsonRejectionInner::MissingContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
			JsonRejectionInner::BufferBody(rejection) => rejection.status(),
			JsonRejectionInner::Deserialize(_) => StatusCode::BAD_REQUEST,
		}
	}
}

impl<T> From<BytesRejection> for JsonRejection<T>
{
	fn from(rejection: BytesRejection) -> Self
	{
		Self { inner: JsonRejectionInner::BufferBody(rejection), ty: PhantomData }
	}
}

impl<T> IntoResponse for JsonRejection<T>
{
	fn into_response(self) -> Response
	{
		let status = self.status();

		tracing::debug!(%status, "rejecting request body: {}", self.inner);

		error_response(status, &self.inner.to_string())
	}
}
