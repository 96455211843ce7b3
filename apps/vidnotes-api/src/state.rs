use std::sync::Arc;

use vidnotes_service::NoteService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<NoteService>,
}
impl AppState {
	/// Serves the file-backed document named in `config.storage`.
	pub fn new(config: vidnotes_config::Config) -> Self {
		Self::from_service(NoteService::open(config))
	}

	pub fn from_service(service: NoteService) -> Self {
		Self { service: Arc::new(service) }
	}
}
