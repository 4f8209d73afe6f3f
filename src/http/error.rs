//! The error type returned by HTTP handlers.

use std::fmt;
use std::panic::Location;

use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;

use crate::recipes::StoreError;

/// Type alias that defaults to our [`Error`] as the default error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The error returned by fallible handlers and middleware.
///
/// Request-body rejections are handled by [`JsonRejection`] instead, so this
/// only ever describes server-side failures.
///
/// [`JsonRejection`]: crate::http::json::JsonRejection
pub struct Error
{
	kind: ErrorKind,

	/// Where this error was created.
	source_location: Location<'static>,
}

#[derive(Debug)]
enum ErrorKind
{
	Store(StoreError),

	/// A handler panicked, but the panic was caught by middleware.
	Panic,
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub(crate) struct ErrorResponse<'a>
{
	pub(crate) message: &'a str,
}

impl Error
{
	#[track_caller]
	fn new(kind: ErrorKind) -> Self
	{
		Self { kind, source_location: *Location::caller() }
	}

	/// Indicate that a handler panicked but the panic was caught.
	#[track_caller]
	pub(crate) fn panic() -> Self
	{
		Self::new(ErrorKind::Panic)
	}

	/// Returns the source code location of where this error was created.
	pub fn source_location(&self) -> Location<'static>
	{
		self.source_location
	}

	fn status(&self) -> StatusCode
	{
		match &self.kind {
			ErrorKind::Store(error) if error.is_unavailable() => StatusCode::SERVICE_UNAVAILABLE,
			ErrorKind::Store(_) | ErrorKind::Panic => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl fmt::Debug for Error
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		write!(f, "[{}]: {:?}", self.source_location, self.kind)
	}
}

impl fmt::Display for Error
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		match self.kind {
			ErrorKind::Store(_) => f.write_str("database error; please report this incident"),
			ErrorKind::Panic => {
				f.write_str("something unexpected happened; please report this incident")
			},
		}
	}
}

impl From<StoreError> for Error
{
	#[track_caller]
	fn from(error: StoreError) -> Self
	{
		Self::new(ErrorKind::Store(error))
	}
}

impl IntoResponse for Error
{
	fn into_response(self) -> Response
	{
		let status = self.status();

		tracing::error! {
			target: "savour_api::audit_log",
			kind = ?self.kind,
			source_location = %self.source_location,
			%status,
			"internal server error: \"{self}\"",
		};

		error_response(status, &self.to_string())
	}
}

/// Builds a response with the given `status` and an [`ErrorResponse`] body.
pub(crate) fn error_response(status: StatusCode, message: &str) -> Response
{
	(status, super::json::Json(ErrorResponse { message })).into_response()
}
