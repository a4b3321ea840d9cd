use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::mailing_dto::{
        CreateMailingPayload, MailingResponse, MessageResponse, UpdateMailingPayload,
    },
    error::Result,
    routes::extract::{AppJson, AppPath},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/mailings",
    request_body = CreateMailingPayload,
    responses(
        (status = 201, description = "Mailing created successfully", body = MailingResponse),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_mailing(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateMailingPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let mailing = state.mailing_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(MailingResponse::from(mailing))))
}

#[utoipa::path(
    get,
    path = "/api/mailings/{id}",
    params(
        ("id" = i64, Path, description = "Mailing ID")
    ),
    responses(
        (status = 200, description = "Mailing found", body = MailingResponse),
        (status = 404, description = "Mailing not found")
    )
)]
#[axum::debug_handler]
pub async fn get_mailing(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse> {
    let mailing = state.mailing_service.get_by_id(id).await?;
    Ok(Json(MailingResponse::from(mailing)))
}

#[utoipa::path(
    put,
    path = "/api/mailings/{id}",
    params(
        ("id" = i64, Path, description = "Mailing ID")
    ),
    request_body = UpdateMailingPayload,
    responses(
        (status = 200, description = "Mailing replaced successfully", body = MailingResponse),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Mailing not found"),
        (status = 422, description = "Missing fields")
    )
)]
#[axum::debug_handler]
pub async fn update_mailing(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<UpdateMailingPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let mailing = state.mailing_service.update(id, payload).await?;
    Ok(Json(MailingResponse::from(mailing)))
}

#[utoipa::path(
    delete,
    path = "/api/mailings/{id}",
    params(
        ("id" = i64, Path, description = "Mailing ID")
    ),
    responses(
        (status = 204, description = "Mailing deleted or already absent"),
        (status = 409, description = "Mailing still referenced by messages")
    )
)]
#[axum::debug_handler]
pub async fn delete_mailing(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse> {
    state.mailing_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/mailings/{id}/messages",
    params(
        ("id" = i64, Path, description = "Mailing ID")
    ),
    responses(
        (status = 200, description = "Messages of the mailing", body = [MessageResponse])
    )
)]
#[axum::debug_handler]
pub async fn list_mailing_messages(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse> {
    let messages = state.mailing_service.messages(id).await?;
    let items: Vec<MessageResponse> = messages.into_iter().map(Into::into).collect();
    Ok(Json(items))
}
