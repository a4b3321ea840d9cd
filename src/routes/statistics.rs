use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{
    dto::statistics_dto::{MailingStatisticsResponse, StatisticsQuery},
    error::Result,
    routes::extract::{AppPath, AppQuery},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/mailings/statistics",
    responses(
        (status = 200, description = "Delivery counts for every mailing, ascending by id", body = [MailingStatisticsResponse])
    )
)]
#[axum::debug_handler]
pub async fn get_mailings_statistics(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let stats = state.statistics_service.all_mailings_statistics().await?;
    let items: Vec<MailingStatisticsResponse> = stats.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/mailings/{id}/statistics",
    params(
        ("id" = i64, Path, description = "Mailing ID"),
        StatisticsQuery
    ),
    responses(
        (status = 200, description = "Delivery counts for the mailing", body = MailingStatisticsResponse),
        (status = 404, description = "Mailing not found (strict mode only)")
    )
)]
#[axum::debug_handler]
pub async fn get_mailing_statistics(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppQuery(query): AppQuery<StatisticsQuery>,
) -> Result<impl IntoResponse> {
    let stats = if query.strict.unwrap_or(false) {
        state.statistics_service.mailing_statistics_checked(id).await?
    } else {
        state.statistics_service.mailing_statistics(id).await?
    };
    Ok(Json(MailingStatisticsResponse::from(stats)))
}
