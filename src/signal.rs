//! OS signals that ask the server to shut down.

use std::error::Error;
use std::future;
use std::io;

/// Resolves once SIGINT or (on unix) SIGTERM is received.
///
/// A signal whose listener cannot be installed is never considered received;
/// the server keeps running and can still be stopped through the other one.
pub(crate) async fn shutdown()
{
	tokio::select! {
		() = wait_for("SIGINT", tokio::signal::ctrl_c()) => {},
		() = wait_for("SIGTERM", sigterm()) => {},
	}
}

async fn wait_for(name: &'static str, signal: impl Future<Output = io::Result<()>>)
{
	match signal.await {
		Ok(()) => tracing::info!("received {name}"),
		Err(err) => {
			tracing::error!(error = &err as &dyn Error, "failed listening for {name}");
			future::pending::<()>().await;
		},
	}
}

#[cfg(unix)]
async fn sigterm() -> io::Result<()>
{
	use tokio::signal::unix::{SignalKind, signal};

	signal(SignalKind::terminate())?
		.recv()
		.await
		.ok_or_else(|| io::Error::other("SIGTERM stream closed"))
}

#[cfg(not(unix))]
async fn sigterm() -> io::Result<()>
{
	future::pending().await
}

#[cfg(test)]
mod tests
{
	use std::time::Duration;

	use super::*;

	#[tokio::test]
	async fn failed_listener_never_resolves()
	{
		let listener = wait_for("SIGTEST", async { Err(io::Error::other("no signals here")) });
		let result = tokio::time::timeout(Duration::from_millis(50), listener).await;

		assert!(result.is_err_and(|elapsed| elapsed.to_string().contains("deadline")));
	}

	#[tokio::test]
	async fn received_signal_resolves()
	{
		let listener = wait_for("SIGTEST", async { Ok(()) });
		let result = tokio::time::timeout(Duration::from_millis(50), listener).await;

		assert_eq!(result.ok(), Some(()));
	}
}
