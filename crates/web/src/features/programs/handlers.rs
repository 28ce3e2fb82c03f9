use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fest_storage::{
    Database,
    dto::program::{CreateProgramRequest, ProgramResponse, UpdateProgramRequest},
    models::ProgramKind,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::AuthContext;

use super::services;

#[utoipa::path(
    get,
    path = "/api/programs/{kind}",
    params(
        ("kind" = ProgramKind, Path, description = "Program kind: stage, nonstage or sports")
    ),
    responses(
        (status = 200, description = "List programs of the given kind", body = Vec<ProgramResponse>),
        (status = 400, description = "Unknown program kind")
    ),
    tag = "programs"
)]
pub async fn list_programs(
    State(db): State<Database>,
    Path(kind): Path<ProgramKind>,
) -> Result<Json<Vec<ProgramResponse>>, WebError> {
    let programs = services::list_programs(db.pool(), kind).await?;

    Ok(Json(programs))
}

#[utoipa::path(
    get,
    path = "/api/programs/{kind}/{id}",
    params(
        ("kind" = ProgramKind, Path, description = "Program kind"),
        ("id" = Uuid, Path, description = "Program id")
    ),
    responses(
        (status = 200, description = "Program found", body = ProgramResponse),
        (status = 404, description = "Program not found")
    ),
    tag = "programs"
)]
pub async fn get_program(
    State(db): State<Database>,
    Path((kind, id)): Path<(ProgramKind, Uuid)>,
) -> Result<Response, WebError> {
    let program = services::get_program(db.pool(), kind, id).await?;

    Ok(Json(program).into_response())
}

#[utoipa::path(
    post,
    path = "/api/programs/{kind}",
    params(
        ("kind" = ProgramKind, Path, description = "Program kind")
    ),
    request_body = CreateProgramRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Program created successfully", body = ProgramResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Program title already exists")
    ),
    tag = "programs"
)]
pub async fn create_program(
    State(db): State<Database>,
    Extension(auth): Extension<AuthContext>,
    Path(kind): Path<ProgramKind>,
    Json(req): Json<CreateProgramRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let program = services::create_program(db.pool(), kind, &req).await?;
    tracing::info!(
        actor = %auth.actor,
        kind = kind.as_str(),
        program_id = %program.program_id,
        "Program created"
    );

    Ok((StatusCode::CREATED, Json(program)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/programs/{kind}/{id}",
    params(
        ("kind" = ProgramKind, Path, description = "Program kind"),
        ("id" = Uuid, Path, description = "Program id")
    ),
    request_body = UpdateProgramRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Program updated successfully", body = ProgramResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Program not found"),
        (status = 409, description = "Program title already exists")
    ),
    tag = "programs"
)]
pub async fn update_program(
    State(db): State<Database>,
    Extension(auth): Extension<AuthContext>,
    Path((kind, id)): Path<(ProgramKind, Uuid)>,
    Json(update_req): Json<UpdateProgramRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_program(db.pool(), kind, id, &update_req).await?;
    tracing::info!(actor = %auth.actor, kind = kind.as_str(), program_id = %id, "Program updated");

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/programs/{kind}/{id}",
    params(
        ("kind" = ProgramKind, Path, description = "Program kind"),
        ("id" = Uuid, Path, description = "Program id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Program and its participations deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Program not found")
    ),
    tag = "programs"
)]
pub async fn delete_program(
    State(db): State<Database>,
    Extension(auth): Extension<AuthContext>,
    Path((kind, id)): Path<(ProgramKind, Uuid)>,
) -> Result<Response, WebError> {
    services::delete_program(db.pool(), kind, id).await?;
    tracing::info!(actor = %auth.actor, kind = kind.as_str(), program_id = %id, "Program deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}
