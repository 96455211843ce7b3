use std::{
	io::ErrorKind,
	path::{Path, PathBuf},
};

use tokio::fs;
use uuid::Uuid;

use crate::{BoxFuture, Error, Result, StoreBackend};

/// Keeps the document in one JSON file.
///
/// Writes go to a sibling temporary file that is then renamed over the target, so readers see
/// either the previous document or the new one in full.
#[derive(Debug, Clone)]
pub struct FileBackend {
	path: PathBuf,
	max_bytes: Option<u64>,
}
impl FileBackend {
	pub fn new(path: impl Into<PathBuf>, max_bytes: Option<u64>) -> Self {
		Self { path: path.into(), max_bytes }
	}

	pub fn from_config(cfg: &vidnotes_config::Storage) -> Self {
		Self::new(cfg.document_path(), cfg.max_document_bytes)
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	async fn read_inner(&self) -> Result<Option<Vec<u8>>> {
		match fs::read(&self.path).await {
			Ok(bytes) => Ok(Some(bytes)),
			Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
			Err(err) => Err(io_error(&self.path, err)),
		}
	}

	async fn write_inner(&self, bytes: Vec<u8>) -> Result<()> {
		if let Some(quota) = self.max_bytes
			&& bytes.len() as u64 > quota
		{
			return Err(Error::QuotaExceeded { bytes: bytes.len() as u64, quota });
		}

		if let Some(parent) = self.path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent).await.map_err(|err| io_error(parent, err))?;
		}

		let tmp_path = self.temp_path();

		fs::write(&tmp_path, &bytes).await.map_err(|err| io_error(&tmp_path, err))?;

		if let Err(err) = fs::rename(&tmp_path, &self.path).await {
			let _ = fs::remove_file(&tmp_path).await;

			return Err(io_error(&self.path, err));
		}

		Ok(())
	}

	async fn remove_inner(&self) -> Result<()> {
		match fs::remove_file(&self.path).await {
			Ok(()) => Ok(()),
			Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
			Err(err) => Err(io_error(&self.path, err)),
		}
	}

	fn temp_path(&self) -> PathBuf {
		let mut name = self.path.file_name().map(|name| name.to_os_string()).unwrap_or_default();

		name.push(format!(".{}.tmp", Uuid::new_v4().simple()));

		self.path.with_file_name(name)
	}
}
impl StoreBackend for FileBackend {
	fn read(&self) -> BoxFuture<'_, Result<Option<Vec<u8>>>> {
		Box::pin(self.read_inner())
	}

	fn write(&self, bytes: Vec<u8>) -> BoxFuture<'_, Result<()>> {
		Box::pin(self.write_inner(bytes))
	}

	fn remove(&self) -> BoxFuture<'_, Result<()>> {
		Box::pin(self.remove_inner())
	}
}

fn io_error(path: &Path, source: std::io::Error) -> Error {
	Error::Io { path: path.to_path_buf(), source }
}
