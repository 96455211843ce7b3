use std::{future::Future, pin::Pin};

use crate::Result;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A medium holding at most one encoded note document.
///
/// Backends move opaque bytes; encoding and the empty-document default live in
/// [`crate::DocumentStore`]. Nothing here coordinates concurrent writers: the last `write` wins.
pub trait StoreBackend
where
	Self: Send + Sync,
{
	/// `Ok(None)` when nothing has been written yet or the document was removed.
	fn read(&self) -> BoxFuture<'_, Result<Option<Vec<u8>>>>;

	/// Replaces the whole document.
	fn write(&self, bytes: Vec<u8>) -> BoxFuture<'_, Result<()>>;

	/// Removing an absent document succeeds.
	fn remove(&self) -> BoxFuture<'_, Result<()>>;
}
