use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fest_storage::{
    Database,
    dto::student::{CreateStudentRequest, StudentResponse, UpdateStudentRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::AuthContext;

use super::services;

#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "List all students with their team", body = Vec<StudentResponse>)
    ),
    tag = "students"
)]
pub async fn list_students(
    State(db): State<Database>,
) -> Result<Json<Vec<StudentResponse>>, WebError> {
    let students = services::list_students(db.pool()).await?;

    Ok(Json(students))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(
        ("id" = Uuid, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "Student found", body = StudentResponse),
        (status = 404, description = "Student not found")
    ),
    tag = "students"
)]
pub async fn get_student(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let student = services::get_student(db.pool(), id).await?;

    Ok(Json(student).into_response())
}

#[utoipa::path(
    post,
    path = "/api/students",
    request_body = CreateStudentRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Student created successfully", body = StudentResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Admission number or fest id already exists")
    ),
    tag = "students"
)]
pub async fn create_student(
    State(db): State<Database>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<CreateStudentRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let student = services::create_student(db.pool(), &req).await?;
    tracing::info!(actor = %auth.actor, student_id = %student.student_id, "Student created");

    Ok((StatusCode::CREATED, Json(student)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/students/{id}",
    params(
        ("id" = Uuid, Path, description = "Student id")
    ),
    request_body = UpdateStudentRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Student updated successfully", body = StudentResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Student not found"),
        (status = 409, description = "Admission number or fest id already exists")
    ),
    tag = "students"
)]
pub async fn update_student(
    State(db): State<Database>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(update_req): Json<UpdateStudentRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_student(db.pool(), id, &update_req).await?;
    tracing::info!(actor = %auth.actor, student_id = %id, "Student updated");

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    params(
        ("id" = Uuid, Path, description = "Student id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Student and their participations deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Student not found")
    ),
    tag = "students"
)]
pub async fn delete_student(
    State(db): State<Database>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_student(db.pool(), id).await?;
    tracing::info!(actor = %auth.actor, student_id = %id, "Student deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}
