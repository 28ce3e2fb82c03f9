use axum::{Json, extract::State};
use fest_storage::{Database, dto::summary::SummaryResponse};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/summary",
    responses(
        (status = 200, description = "Counts of teams, students, programs, participations and results", body = SummaryResponse)
    ),
    tag = "summary"
)]
pub async fn get_summary(State(db): State<Database>) -> Result<Json<SummaryResponse>, WebError> {
    let summary = services::get_summary(db.pool()).await?;

    Ok(Json(summary))
}
