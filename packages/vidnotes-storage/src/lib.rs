pub mod backend;
pub mod document;
pub mod file;
pub mod memory;
pub mod models;

mod error;

pub use backend::{BoxFuture, StoreBackend};
pub use document::DocumentStore;
pub use error::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;
