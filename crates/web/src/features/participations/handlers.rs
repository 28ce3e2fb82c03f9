use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fest_storage::{
    Database,
    dto::participation::{CreateParticipationRequest, DetailedParticipation},
    models::Participation,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::AuthContext;

use super::services;

#[utoipa::path(
    get,
    path = "/api/participations",
    responses(
        (status = 200, description = "List participations with program and participant names", body = Vec<DetailedParticipation>)
    ),
    tag = "participations"
)]
pub async fn list_participations(
    State(db): State<Database>,
) -> Result<Json<Vec<DetailedParticipation>>, WebError> {
    let participations = services::list_participations(db.pool()).await?;

    Ok(Json(participations))
}

#[utoipa::path(
    post,
    path = "/api/participations",
    request_body = CreateParticipationRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Participant registered", body = Participation),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Program, student or team not found"),
        (status = 409, description = "Participant already registered for this program")
    ),
    tag = "participations"
)]
pub async fn create_participation(
    State(db): State<Database>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<CreateParticipationRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let participation = services::create_participation(db.pool(), &req).await?;
    tracing::info!(
        actor = %auth.actor,
        participation_id = %participation.participation_id,
        program_id = %participation.program_id,
        "Participation created"
    );

    Ok((StatusCode::CREATED, Json(participation)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/participations/{id}",
    params(
        ("id" = Uuid, Path, description = "Participation id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Participation deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Participation not found")
    ),
    tag = "participations"
)]
pub async fn delete_participation(
    State(db): State<Database>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_participation(db.pool(), id).await?;
    tracing::info!(actor = %auth.actor, participation_id = %id, "Participation deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}
