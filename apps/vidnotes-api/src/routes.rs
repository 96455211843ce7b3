use axum::{
	Json, Router,
	extract::{Path, Query, State},
	http::{StatusCode, header},
	response::{IntoResponse, Response},
	routing::{delete, get, post},
};
use serde::Serialize;

use crate::state::AppState;
use vidnotes_service::{
	AddNoteRequest, AddNoteResponse, DeleteRequest, DeleteResponse, Error as ServiceError,
	ImportResponse, ListRequest, ListResponse,
};

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/videos", get(list_videos))
		.route("/v1/notes", post(add_note))
		.route("/v1/videos/{video_id}/notes/{note_id}", delete(delete_note))
		.route("/v1/export", get(export_all))
		.route("/v1/import", post(import_all))
		.route("/v1/clear", post(clear_all))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn list_videos(
	State(state): State<AppState>,
	Query(req): Query<ListRequest>,
) -> Result<Json<ListResponse>, ApiError> {
	let response = state.service.list_videos(req).await?;

	Ok(Json(response))
}

async fn add_note(
	State(state): State<AppState>,
	Json(payload): Json<AddNoteRequest>,
) -> Result<Json<AddNoteResponse>, ApiError> {
	let req = payload.gated(&state.service.cfg)?;
	let response = state.service.add_note(req).await?;

	Ok(Json(response))
}

async fn delete_note(
	State(state): State<AppState>,
	Path((video_id, note_id)): Path<(String, String)>,
) -> Result<Json<DeleteResponse>, ApiError> {
	let response = state.service.delete_note(DeleteRequest { video_id, note_id }).await?;

	Ok(Json(response))
}

async fn export_all(State(state): State<AppState>) -> Result<Response, ApiError> {
	let export = state.service.export_all().await?;
	let headers = [
		(header::CONTENT_TYPE, "application/json".to_string()),
		(header::CONTENT_DISPOSITION, format!("attachment; filename=\"{}\"", export.file_name)),
	];

	Ok((headers, export.body).into_response())
}

async fn import_all(
	State(state): State<AppState>,
	body: String,
) -> Result<Json<ImportResponse>, ApiError> {
	let response = state.service.import_all(&body).await?;

	Ok(Json(response))
}

async fn clear_all(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
	state.service.clear_all().await?;

	Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}
impl ApiError {
	fn new(
		status: StatusCode,
		error_code: impl Into<String>,
		message: impl Into<String>,
		fields: Option<Vec<String>>,
	) -> Self {
		Self { status, error_code: error_code.into(), message: message.into(), fields }
	}
}
impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::Rejected { reason_code, field } => {
				let message = format!("Rejected {field}.");

				Self::new(StatusCode::BAD_REQUEST, reason_code, message, Some(vec![field]))
			},
			ServiceError::ImportFormat { message } =>
				Self::new(StatusCode::BAD_REQUEST, "IMPORT_FORMAT_ERROR", message, None),
			ServiceError::Persistence { message } => {
				tracing::error!(error = %message, "Note document persistence failed.");

				Self::new(StatusCode::INTERNAL_SERVER_ERROR, "PERSISTENCE_ERROR", message, None)
			},
		}
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body =
			ErrorBody { error_code: self.error_code, message: self.message, fields: self.fields };

		(self.status, Json(body)).into_response()
	}
}
