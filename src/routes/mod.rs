pub mod clients;
pub mod extract;
pub mod health;
pub mod mailings;
pub mod statistics;

use axum::{
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::dto::{
    client_dto::{ClientResponse, CreateClientPayload, UpdateClientPayload},
    mailing_dto::{CreateMailingPayload, MailingResponse, MessageResponse, UpdateMailingPayload},
    statistics_dto::MailingStatisticsResponse,
};
use crate::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        clients::create_client,
        clients::get_client,
        clients::update_client,
        clients::delete_client,
        mailings::create_mailing,
        mailings::get_mailing,
        mailings::update_mailing,
        mailings::delete_mailing,
        mailings::list_mailing_messages,
        statistics::get_mailings_statistics,
        statistics::get_mailing_statistics,
    ),
    components(schemas(
        CreateClientPayload,
        UpdateClientPayload,
        ClientResponse,
        CreateMailingPayload,
        UpdateMailingPayload,
        MailingResponse,
        MessageResponse,
        MailingStatisticsResponse,
    ))
)]
pub struct ApiDoc;

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/openapi.json", get(openapi))
        .route("/api/clients", post(clients::create_client))
        .route(
            "/api/clients/:id",
            get(clients::get_client)
                .patch(clients::update_client)
                .put(clients::update_client)
                .delete(clients::delete_client),
        )
        .route("/api/mailings", post(mailings::create_mailing))
        .route(
            "/api/mailings/statistics",
            get(statistics::get_mailings_statistics),
        )
        .route(
            "/api/mailings/:id",
            get(mailings::get_mailing)
                .put(mailings::update_mailing)
                .delete(mailings::delete_mailing),
        )
        .route(
            "/api/mailings/:id/statistics",
            get(statistics::get_mailing_statistics),
        )
        .route(
            "/api/mailings/:id/messages",
            get(mailings::list_mailing_messages),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
