use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fest_storage::{
    Database,
    dto::team::{CreateTeamRequest, UpdateTeamRequest},
    models::Team,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::AuthContext;

use super::services;

#[utoipa::path(
    get,
    path = "/api/teams",
    responses(
        (status = 200, description = "List all teams successfully", body = Vec<Team>)
    ),
    tag = "teams"
)]
pub async fn list_teams(State(db): State<Database>) -> Result<Json<Vec<Team>>, WebError> {
    let teams = services::list_teams(db.pool()).await?;

    Ok(Json(teams))
}

#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    params(
        ("id" = Uuid, Path, description = "Team id")
    ),
    responses(
        (status = 200, description = "Team found", body = Team),
        (status = 404, description = "Team not found")
    ),
    tag = "teams"
)]
pub async fn get_team(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let team = services::get_team(db.pool(), id).await?;

    Ok(Json(team).into_response())
}

#[utoipa::path(
    post,
    path = "/api/teams",
    request_body = CreateTeamRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Team created successfully", body = Team),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Team name already exists")
    ),
    tag = "teams"
)]
pub async fn create_team(
    State(db): State<Database>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<CreateTeamRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let team = services::create_team(db.pool(), &req).await?;
    tracing::info!(actor = %auth.actor, team_id = %team.team_id, "Team created");

    Ok((StatusCode::CREATED, Json(team)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/teams/{id}",
    params(
        ("id" = Uuid, Path, description = "Team id")
    ),
    request_body = UpdateTeamRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Team updated successfully", body = Team),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Team not found"),
        (status = 409, description = "Team name already exists")
    ),
    tag = "teams"
)]
pub async fn update_team(
    State(db): State<Database>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(update_req): Json<UpdateTeamRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_team(db.pool(), id, &update_req).await?;
    tracing::info!(actor = %auth.actor, team_id = %id, "Team updated");

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    params(
        ("id" = Uuid, Path, description = "Team id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Team deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Team not found"),
        (status = 409, description = "Team still has students or participations")
    ),
    tag = "teams"
)]
pub async fn delete_team(
    State(db): State<Database>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_team(db.pool(), id).await?;
    tracing::info!(actor = %auth.actor, team_id = %id, "Team deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}
