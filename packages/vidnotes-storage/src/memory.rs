use std::sync::{
	Mutex,
	atomic::{AtomicUsize, Ordering},
};

use crate::{BoxFuture, Error, Result, StoreBackend};

/// Process-local medium. Each read hands out a copy of the stored bytes, so callers never share a
/// decoded document.
#[derive(Debug, Default)]
pub struct MemoryBackend {
	bytes: Mutex<Option<Vec<u8>>>,
	max_bytes: Option<u64>,
	writes: AtomicUsize,
}
impl MemoryBackend {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_quota(max_bytes: u64) -> Self {
		Self { max_bytes: Some(max_bytes), ..Self::default() }
	}

	/// Number of successful writes so far.
	pub fn write_count(&self) -> usize {
		self.writes.load(Ordering::SeqCst)
	}

	pub fn raw(&self) -> Option<Vec<u8>> {
		self.bytes.lock().unwrap_or_else(|err| err.into_inner()).clone()
	}

	fn write_now(&self, bytes: Vec<u8>) -> Result<()> {
		if let Some(quota) = self.max_bytes
			&& bytes.len() as u64 > quota
		{
			return Err(Error::QuotaExceeded { bytes: bytes.len() as u64, quota });
		}

		*self.bytes.lock().unwrap_or_else(|err| err.into_inner()) = Some(bytes);

		self.writes.fetch_add(1, Ordering::SeqCst);

		Ok(())
	}
}
impl StoreBackend for MemoryBackend {
	fn read(&self) -> BoxFuture<'_, Result<Option<Vec<u8>>>> {
		let bytes = self.raw();

		Box::pin(async move { Ok(bytes) })
	}

	fn write(&self, bytes: Vec<u8>) -> BoxFuture<'_, Result<()>> {
		let result = self.write_now(bytes);

		Box::pin(async move { result })
	}

	fn remove(&self) -> BoxFuture<'_, Result<()>> {
		*self.bytes.lock().unwrap_or_else(|err| err.into_inner()) = None;

		Box::pin(async { Ok(()) })
	}
}
