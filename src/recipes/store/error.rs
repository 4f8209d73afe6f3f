use derive_more::{Display, Error, From};

pub type StoreResult<T> = Result<T, StoreError>;

/// The persistence medium was unreachable or rejected an operation.
#[derive(Debug, Display, Error, From)]
#[display("database error: {_0}")]
pub struct StoreError(sqlx::Error);

impl StoreError
{
	/// Returns whether the database could not be reached at all, as opposed
	/// to rejecting a particular query.
	pub fn is_unavailable(&self) -> bool
	{
		matches!(
			self.0,
			sqlx::Error::Io(_)
				| sqlx::Error::Tls(_)
				| sqlx::Error::PoolTimedOut
				| sqlx::Error::PoolClosed
				| sqlx::Error::WorkerCrashed
		)
	}
}
