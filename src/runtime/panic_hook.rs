//! Global panic hook that routes panics through `tracing`.
//!
//! Panics inside request handlers are already turned into responses by the
//! HTTP middleware; this hook makes sure they also end up in the audit log,
//! together with a backtrace.

use std::backtrace::Backtrace;
use std::panic;

/// Installs the hook. The previously installed hook runs afterwards.
pub(crate) fn install()
{
	let old_hook = panic::take_hook();

	panic::set_hook(Box::new(move |info| {
		tracing::error_span!(target: "savour_api::runtime", "panic_hook").in_scope(|| {
			let backtrace = Backtrace::force_capture();

			tracing::error! {
				target: "savour_api::audit_log",
				"\n{info}\n---\nbacktrace:\n{backtrace}",
			};
		});

		old_hook(info)
	}));
}
