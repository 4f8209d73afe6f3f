use std::time::Duration;

use http::{HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// How long browsers may cache preflight responses.
const MAX_AGE: Duration = Duration::from_secs(1800);

/// Permits cross-origin requests from `allowed_origins`.
///
/// Requests from any other origin are still served, but without the headers
/// that would allow a browser to read the response.
pub(crate) fn layer(allowed_origins: impl IntoIterator<Item = HeaderValue>) -> CorsLayer
{
	CorsLayer::new()
		.allow_origin(AllowOrigin::list(allowed_origins))
		.allow_methods(AllowMethods::list([Method::GET, Method::POST]))
		.allow_headers(AllowHeaders::mirror_request())
		.max_age(MAX_AGE)
}
