//! Utilities.

pub(crate) mod serde;
