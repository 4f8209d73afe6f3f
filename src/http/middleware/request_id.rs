use http::HeaderValue;
use tower_http::request_id::{
	MakeRequestId,
	PropagateRequestIdLayer,
	RequestId,
	SetRequestIdLayer,
};
use ulid::Ulid;

/// Assigns every request an `x-request-id` (unless it already has one) and
/// copies it onto the response.
pub(crate) fn layers() -> (SetRequestIdLayer<MakeUlidRequestId>, PropagateRequestIdLayer)
{
	(SetRequestIdLayer::x_request_id(MakeUlidRequestId), PropagateRequestIdLayer::x_request_id())
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct MakeUlidRequestId;

impl MakeRequestId for MakeUlidRequestId
{
	fn make_request_id<B>(&mut self, _: &http::Request<B>) -> Option<RequestId>
	{
		HeaderValue::from_str(&Ulid::new().to_string())
			.inspect_err(|error| tracing::warn!(%error, "failed to generate request ID"))
			.map(RequestId::new)
			.ok()
	}
}
