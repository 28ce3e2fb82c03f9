use axum::{
    Extension, Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use fest_storage::{
    Database,
    dto::result::UpdateScoringRuleRequest,
    models::{Position, ScoringRule},
};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::AuthContext;

use super::services;

#[utoipa::path(
    get,
    path = "/api/scoring-rules",
    responses(
        (status = 200, description = "Default points per position", body = Vec<ScoringRule>)
    ),
    tag = "scoring-rules"
)]
pub async fn list_rules(State(db): State<Database>) -> Result<Json<Vec<ScoringRule>>, WebError> {
    let rules = services::list_rules(db.pool()).await?;

    Ok(Json(rules))
}

#[utoipa::path(
    put,
    path = "/api/scoring-rules/{position}",
    params(
        ("position" = Position, Path, description = "Position: 1st, 2nd or 3rd")
    ),
    request_body = UpdateScoringRuleRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Scoring rule updated", body = ScoringRule),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "scoring-rules"
)]
pub async fn update_rule(
    State(db): State<Database>,
    Extension(auth): Extension<AuthContext>,
    Path(position): Path<Position>,
    Json(update_req): Json<UpdateScoringRuleRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let rule = services::update_rule(db.pool(), position, update_req.default_points).await?;
    tracing::info!(
        actor = %auth.actor,
        position = ?rule.position,
        default_points = rule.default_points,
        "Scoring rule updated"
    );

    Ok(Json(rule).into_response())
}
