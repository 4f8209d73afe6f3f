//! Database connections.

use std::num::NonZero;

use derive_more::Debug;
use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use url::Url;

mod error;
pub use error::ConnectError;

/// The default minimum number of pool connections.
pub const MIN_CONNECTIONS: u32 = if cfg!(test) { 1 } else { 5 };

/// The default maximum number of pool connections.
pub const MAX_CONNECTIONS: u32 = if cfg!(test) { 5 } else { 50 };

/// Options for [`connect()`].
#[derive(Debug, bon::Builder)]
pub struct ConnectOptions<'a>
{
	/// `mysql://` URL of the database, including credentials and schema name.
	#[debug("{:?}", url.host_str())]
	url: &'a Url,

	/// Defaults to [`MIN_CONNECTIONS`].
	min_connections: Option<NonZero<u32>>,

	/// Defaults to [`MAX_CONNECTIONS`].
	max_connections: Option<NonZero<u32>>,
}

/// Connects to the database and applies any outstanding migrations.
#[tracing::instrument(skip_all, fields(host = ?options.url.host_str()), err)]
pub async fn connect(options: ConnectOptions<'_>) -> Result<MySqlPool, ConnectError>
{
	let min_connections = options.min_connections.map_or(MIN_CONNECTIONS, NonZero::get);
	let max_connections = options.max_connections.map_or(MAX_CONNECTIONS, NonZero::get);

	tracing::debug!(min_connections, max_connections, "connecting to database");

	let pool = MySqlPoolOptions::new()
		.min_connections(min_connections)
		.max_connections(max_connections)
		.connect(options.url.as_str())
		.await
		.map_err(ConnectError::Connect)?;

	tracing::debug!("running migrations");

	sqlx::migrate!("./migrations").run(&pool).await?;

	tracing::info!("connected to database");

	Ok(pool)
}
