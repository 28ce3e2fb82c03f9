use fest_storage::{
    dto::student::{CreateStudentRequest, StudentResponse, UpdateStudentRequest},
    error::Result,
    repository::student::StudentRepository,
};
use sqlx::PgPool;
use uuid::Uuid;

/// List all students with their team names
pub async fn list_students(pool: &PgPool) -> Result<Vec<StudentResponse>> {
    let repo = StudentRepository::new(pool);
    repo.list().await
}

pub async fn get_student(pool: &PgPool, id: Uuid) -> Result<StudentResponse> {
    let repo = StudentRepository::new(pool);
    repo.find_detailed(id).await
}

/// Create a student and return it with its team name
pub async fn create_student(
    pool: &PgPool,
    request: &CreateStudentRequest,
) -> Result<StudentResponse> {
    let repo = StudentRepository::new(pool);
    let student = repo.create(request).await?;
    repo.find_detailed(student.student_id).await
}

pub async fn update_student(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateStudentRequest,
) -> Result<StudentResponse> {
    let repo = StudentRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    let updated = repo.update(existing.student_id, &existing, request).await?;
    repo.find_detailed(updated.student_id).await
}

/// Delete a student together with their participations
pub async fn delete_student(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = StudentRepository::new(pool);
    repo.delete(id).await
}
