use std::time::Duration;

use http::{Request, Response};
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::request_id::RequestId;
use tower_http::trace::{
	DefaultOnBodyChunk,
	DefaultOnEos,
	HttpMakeClassifier,
	MakeSpan,
	OnFailure,
	OnRequest,
	OnResponse,
	TraceLayer,
};

pub(crate) type Layer = TraceLayer<
	HttpMakeClassifier,
	MakeRequestSpan,
	LogRequest,
	LogResponse,
	DefaultOnBodyChunk,
	DefaultOnEos,
	LogFailure,
>;

/// Wraps every request in a span and logs when it starts and finishes.
///
/// Request/response headers are only recorded if `include_headers` is set.
pub(crate) fn layer(include_headers: bool) -> Layer
{
	TraceLayer::new_for_http()
		.make_span_with(MakeRequestSpan)
		.on_request(LogRequest { include_headers })
		.on_response(LogResponse { include_headers })
		.on_failure(LogFailure)
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct MakeRequestSpan;

#[derive(Debug, Clone, Copy)]
pub(crate) struct LogRequest
{
	include_headers: bool,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct LogResponse
{
	include_headers: bool,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct LogFailure;

impl<B> MakeSpan<B> for MakeRequestSpan
{
	fn make_span(&mut self, _: &Request<B>) -> tracing::Span
	{
		tracing::info_span!(
			target: "savour_api::http",
			"request",
			req.id = tracing::field::Empty,
			req.method = tracing::field::Empty,
			req.uri = tracing::field::Empty,
			req.version = tracing::field::Empty,
			req.headers = tracing::field::Empty,
			res.status = tracing::field::Empty,
			res.headers = tracing::field::Empty,
		)
	}
}

impl<B> OnRequest<B> for LogRequest
{
	fn on_request(&mut self, req: &Request<B>, span: &tracing::Span)
	{
		if let Some(request_id) = req.extensions().get::<RequestId>() {
			span.record("req.id", tracing::field::debug(request_id.header_value()));
		} else {
			tracing::warn!(target: "savour_api::http", "no request ID in request extensions");
		}

		span.record("req.method", tracing::field::debug(req.method()));
		span.record("req.uri", tracing::field::display(req.uri()));
		span.record("req.version", tracing::field::debug(req.version()));

		if self.include_headers {
			span.record("req.headers", tracing::field::debug(req.headers()));
		}

		tracing::info!(target: "savour_api::http", "starting to process request");
	}
}

impl<B> OnResponse<B> for LogResponse
{
	fn on_response(self, res: &Response<B>, latency: Duration, span: &tracing::Span)
	{
		span.record("res.status", res.status().as_u16());

		if self.include_headers {
			span.record("res.headers", tracing::field::debug(res.headers()));
		}

		tracing::info!(target: "savour_api::http", ?latency, "finished processing request");
	}
}

impl OnFailure<ServerErrorsFailureClass> for LogFailure
{
	fn on_failure(
		&mut self,
		failure_class: ServerErrorsFailureClass,
		latency: Duration,
		_span: &tracing::Span,
	)
	{
		match failure_class {
			ServerErrorsFailureClass::StatusCode(status) => {
				tracing::error!(
					target: "savour_api::http",
					status = status.as_u16(),
					?latency,
					"failed to handle request",
				);
			},
			ServerErrorsFailureClass::Error(error) => {
				tracing::error!(
					target: "savour_api::http",
					%error,
					?latency,
					"failed to handle request",
				);
			},
		}
	}
}
