use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use service::DiaryEntry;
use tracing::info;

use crate::{errors::JsonApiError, routes::DIARY_ENTRIES_PATH, state::AppState};

type Entry = models::diary_entry::Model;

#[utoipa::path(
    get, path = "/api/DiaryEntries", tag = "diary",
    responses(
        (status = 200, description = "All entries", body = [crate::openapi::DiaryEntryDoc]),
        (status = 500, description = "Store Failure", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Entry>>, JsonApiError> {
    let rows = state.diary.list_all().await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get, path = "/api/DiaryEntries/{id}", tag = "diary",
    params(("id" = i32, Path, description = "Diary entry id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::DiaryEntryDoc),
        (status = 400, description = "Invalid Path", body = crate::openapi::ErrorBodyDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Entry>, JsonApiError> {
    let Path(id) = path?;
    let row = state.diary.get_by_id(id).await?;
    Ok(Json(row))
}

#[utoipa::path(
    post, path = "/api/DiaryEntries", tag = "diary",
    request_body = crate::openapi::DiaryEntryInputDoc,
    responses(
        (status = 201, description = "Created; Location points at the new entry", body = crate::openapi::DiaryEntryDoc),
        (status = 400, description = "Invalid Body", body = crate::openapi::ErrorBodyDoc),
        (status = 500, description = "Store Failure", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<DiaryEntry>, JsonRejection>,
) -> Result<impl IntoResponse, JsonApiError> {
    let Json(input) = body?;
    let created = state.diary.create(input).await?;
    let location = format!("{}/{}", DIARY_ENTRIES_PATH, created.id);
    info!(id = created.id, %location, "created diary entry");
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

#[utoipa::path(
    put, path = "/api/DiaryEntries/{id}", tag = "diary",
    params(("id" = i32, Path, description = "Diary entry id; must equal the body id")),
    request_body = crate::openapi::DiaryEntryInputDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Id mismatch, invalid path, or invalid body", body = crate::openapi::ErrorBodyDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc),
        (status = 409, description = "Concurrency Conflict", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<DiaryEntry>, JsonRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = path?;
    let Json(input) = body?;
    state.diary.update(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}
