//! Catches panics in handlers.
//!
//! Normally, if a handler panics, the connection will simply be closed.
//! This middleware turns the panic into a proper `500` response instead.

use std::any::Any;

use axum::response::IntoResponse;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

use crate::http::Error;

pub(crate) fn layer() -> CatchPanicLayer<PanicHandler>
{
	CatchPanicLayer::custom(PanicHandler)
}

/// A custom panic handler for [`CatchPanicLayer`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct PanicHandler;

impl ResponseForPanic for PanicHandler
{
	type ResponseBody = axum::body::Body;

	fn response_for_panic(
		&mut self,
		_err: Box<dyn Any + Send + 'static>,
	) -> http::Response<Self::ResponseBody>
	{
		Error::panic().into_response()
	}
}
