pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Rejected {field}: {reason_code}")]
	Rejected { reason_code: String, field: String },
	#[error("Import format error: {message}")]
	ImportFormat { message: String },
	#[error("Persistence error: {message}")]
	Persistence { message: String },
}
impl From<vidnotes_storage::Error> for Error {
	fn from(err: vidnotes_storage::Error) -> Self {
		Self::Persistence { message: err.to_string() }
	}
}
impl From<vidnotes_domain::writegate::RejectCode> for Error {
	fn from(code: vidnotes_domain::writegate::RejectCode) -> Self {
		Self::Rejected { reason_code: code.as_str().to_string(), field: code.field().to_string() }
	}
}
