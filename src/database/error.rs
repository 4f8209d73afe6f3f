use derive_more::{Display, Error, From};

/// Errors that can occur in [`connect()`].
///
/// [`connect()`]: super::connect()
#[derive(Debug, Display, Error, From)]
pub enum ConnectError
{
	#[display("failed to connect to database: {_0}")]
	#[from(ignore)]
	Connect(sqlx::Error),

	#[display("failed to run migrations: {_0}")]
	Migrate(sqlx::migrate::MigrateError),
}
