use std::io;

use tokio::runtime::{Builder, Runtime};

use crate::config::RuntimeConfig;

pub(crate) mod panic_hook;

pub(crate) fn build(config: &RuntimeConfig) -> io::Result<Runtime>
{
	let mut builder = Builder::new_multi_thread();

	builder.enable_time();
	builder.enable_io();

	if let Some(n) = config.worker_threads {
		builder.worker_threads(n.get());
	}

	if let Some(n) = config.max_blocking_threads {
		builder.max_blocking_threads(n.get());
	}

	builder.build()
}
