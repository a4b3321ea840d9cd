use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::client_dto::{ClientResponse, CreateClientPayload, UpdateClientPayload},
    error::Result,
    routes::extract::{AppJson, AppPath},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/clients",
    request_body = CreateClientPayload,
    responses(
        (status = 201, description = "Client created successfully", body = ClientResponse),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_client(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateClientPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let client = state.client_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(ClientResponse::from(client))))
}

#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    params(
        ("id" = i64, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Client found", body = ClientResponse),
        (status = 404, description = "Client not found")
    )
)]
#[axum::debug_handler]
pub async fn get_client(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse> {
    let client = state.client_service.get_by_id(id).await?;
    Ok(Json(ClientResponse::from(client)))
}

#[utoipa::path(
    patch,
    path = "/api/clients/{id}",
    params(
        ("id" = i64, Path, description = "Client ID")
    ),
    request_body = UpdateClientPayload,
    responses(
        (status = 200, description = "Client updated successfully", body = ClientResponse),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Client not found")
    )
)]
#[axum::debug_handler]
pub async fn update_client(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<UpdateClientPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let client = state.client_service.update(id, payload).await?;
    Ok(Json(ClientResponse::from(client)))
}

#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    params(
        ("id" = i64, Path, description = "Client ID")
    ),
    responses(
        (status = 204, description = "Client deleted or already absent"),
        (status = 409, description = "Client still referenced by messages")
    )
)]
#[axum::debug_handler]
pub async fn delete_client(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse> {
    state.client_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
