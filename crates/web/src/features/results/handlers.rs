use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fest_storage::{
    Database,
    dto::{
        participation::UnscoredParticipation,
        result::{CreateResultRequest, DetailedResult, UpdateResultRequest},
    },
    models::ProgramResult,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::AuthContext;

use super::services;

#[utoipa::path(
    get,
    path = "/api/results",
    responses(
        (status = 200, description = "List results with program and participant names", body = Vec<DetailedResult>)
    ),
    tag = "results"
)]
pub async fn list_results(
    State(db): State<Database>,
) -> Result<Json<Vec<DetailedResult>>, WebError> {
    let results = services::list_results(db.pool()).await?;

    Ok(Json(results))
}

#[utoipa::path(
    get,
    path = "/api/results/unscored",
    responses(
        (status = 200, description = "Participations without a result, newest first", body = Vec<UnscoredParticipation>)
    ),
    tag = "results"
)]
pub async fn list_unscored(
    State(db): State<Database>,
) -> Result<Json<Vec<UnscoredParticipation>>, WebError> {
    let unscored = services::list_unscored(db.pool()).await?;

    Ok(Json(unscored))
}

#[utoipa::path(
    post,
    path = "/api/results",
    request_body = CreateResultRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Result recorded", body = ProgramResult),
        (status = 400, description = "Validation error, e.g. neither position nor grade"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Participation not found"),
        (status = 409, description = "Participation already scored")
    ),
    tag = "results"
)]
pub async fn create_result(
    State(db): State<Database>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<CreateResultRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let result = services::create_result(db.pool(), &req).await?;
    tracing::info!(
        actor = %auth.actor,
        result_id = %result.result_id,
        participation_id = %result.participation_id,
        points = result.points_awarded,
        "Result recorded"
    );

    Ok((StatusCode::CREATED, Json(result)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/results/{id}",
    params(
        ("id" = Uuid, Path, description = "Result id")
    ),
    request_body = UpdateResultRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Result updated", body = ProgramResult),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Result not found")
    ),
    tag = "results"
)]
pub async fn update_result(
    State(db): State<Database>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(update_req): Json<UpdateResultRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_result(db.pool(), id, &update_req).await?;
    tracing::info!(
        actor = %auth.actor,
        result_id = %id,
        points = updated.points_awarded,
        "Result updated"
    );

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/results/{id}",
    params(
        ("id" = Uuid, Path, description = "Result id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Result deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Result not found")
    ),
    tag = "results"
)]
pub async fn delete_result(
    State(db): State<Database>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_result(db.pool(), id).await?;
    tracing::info!(actor = %auth.actor, result_id = %id, "Result deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}
