mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	Config, DEFAULT_STORAGE_KEY, DEFAULT_WATCH_URL_BASE, Notes, Security, Service, Storage,
};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.storage.data_dir.as_os_str().is_empty() {
		return Err(Error::Validation {
			message: "storage.data_dir must be non-empty.".to_string(),
		});
	}
	if cfg.storage.key.is_empty() {
		return Err(Error::Validation { message: "storage.key must be non-empty.".to_string() });
	}
	if !cfg.storage.key.chars().all(is_key_char) {
		return Err(Error::Validation {
			message: "storage.key may only contain ASCII letters, digits, '_', '.', or '-'."
				.to_string(),
		});
	}

	if let Some(max) = cfg.storage.max_document_bytes
		&& max == 0
	{
		return Err(Error::Validation {
			message: "storage.max_document_bytes must be greater than zero.".to_string(),
		});
	}

	if cfg.notes.max_note_chars == 0 {
		return Err(Error::Validation {
			message: "notes.max_note_chars must be greater than zero.".to_string(),
		});
	}

	let base = cfg.notes.watch_url_base.as_str();

	if !(base.starts_with("http://") || base.starts_with("https://")) {
		return Err(Error::Validation {
			message: "notes.watch_url_base must start with http:// or https://.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.service.log_level = cfg.service.log_level.trim().to_string();

	if cfg.notes.watch_url_base.trim().is_empty() {
		cfg.notes.watch_url_base = DEFAULT_WATCH_URL_BASE.to_string();
	} else {
		cfg.notes.watch_url_base = cfg.notes.watch_url_base.trim().to_string();
	}
}

fn is_key_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}
