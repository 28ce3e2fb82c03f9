use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use fest_storage::{Database, dto::leaderboard::LeaderboardEntry};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    responses(
        (status = 200, description = "Teams ranked by total points, dense ranking", body = Vec<LeaderboardEntry>)
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(State(db): State<Database>) -> Result<Response, WebError> {
    let entries = services::get_leaderboard(db.pool()).await?;

    Ok(Json(entries).into_response())
}
