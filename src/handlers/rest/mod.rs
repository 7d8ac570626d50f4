mod extract;

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;
use utoipa::OpenApi;

use std::sync::Arc;

use crate::{
    dto::{CreateNoteRequest, NoteResponse, UpdateNoteRequest},
    service::{NoteService, NoteServiceError},
};

pub use extract::NotePayload;

#[derive(OpenApi)]
#[openapi(
    paths(create_note, get_all_notes, update_note, delete_note),
    components(schemas(NoteResponse, CreateNoteRequest, UpdateNoteRequest)),
    tags(
        (name = "notes", description = "In-memory notes API")
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    post,
    path = "/api/notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created successfully", body = NoteResponse,
            headers(("location" = String, description = "Path of the created note"))),
        (status = 400, description = "Malformed note payload")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn create_note(
    State(service): State<Arc<NoteService>>,
    NotePayload(payload): NotePayload<CreateNoteRequest>,
) -> Response {
    let (id, note) = service.create_note(payload).await;

    (
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/notes/{id}"))],
        Json(note),
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/api/notes",
    responses(
        (status = 200, description = "List of all notes", body = Vec<NoteResponse>)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_all_notes(State(service): State<Arc<NoteService>>) -> Response {
    (StatusCode::OK, Json(service.get_all_notes().await)).into_response()
}

#[utoipa::path(
    put,
    path = "/api/notes/{id}",
    params(
        ("id" = String, Path, description = "Note key")
    ),
    request_body = UpdateNoteRequest,
    responses(
        (status = 204, description = "Note updated, or unknown key ignored"),
        (status = 400, description = "Malformed note payload"),
        (status = 404, description = "Note not found (report policy only)")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn update_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<String>,
    NotePayload(payload): NotePayload<UpdateNoteRequest>,
) -> Response {
    match service.update_note(&id, payload).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => service_error_response(&e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/notes/{id}",
    params(
        ("id" = String, Path, description = "Note key")
    ),
    responses(
        (status = 204, description = "Note deleted, or unknown key ignored"),
        (status = 404, description = "Note not found (report policy only)")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn delete_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<String>,
) -> Response {
    match service.delete_note(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => service_error_response(&e),
    }
}

fn service_error_response(e: &NoteServiceError) -> Response {
    match e {
        NoteServiceError::KeyNotFound(_) => (StatusCode::NOT_FOUND, "Note not found").into_response(),
    }
}
