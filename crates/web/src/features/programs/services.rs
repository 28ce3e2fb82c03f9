use fest_storage::{
    dto::program::{CreateProgramRequest, ProgramResponse, UpdateProgramRequest},
    error::Result,
    models::ProgramKind,
    repository::program::ProgramRepository,
};
use sqlx::PgPool;
use uuid::Uuid;

/// List programs of one kind
pub async fn list_programs(pool: &PgPool, kind: ProgramKind) -> Result<Vec<ProgramResponse>> {
    let repo = ProgramRepository::new(pool, kind);
    let programs = repo.list().await?;

    Ok(programs
        .into_iter()
        .map(|program| ProgramResponse::new(kind, program))
        .collect())
}

pub async fn get_program(pool: &PgPool, kind: ProgramKind, id: Uuid) -> Result<ProgramResponse> {
    let repo = ProgramRepository::new(pool, kind);
    let program = repo.find_by_id(id).await?;

    Ok(ProgramResponse::new(kind, program))
}

pub async fn create_program(
    pool: &PgPool,
    kind: ProgramKind,
    request: &CreateProgramRequest,
) -> Result<ProgramResponse> {
    let repo = ProgramRepository::new(pool, kind);
    let program = repo.create(request).await?;

    Ok(ProgramResponse::new(kind, program))
}

pub async fn update_program(
    pool: &PgPool,
    kind: ProgramKind,
    id: Uuid,
    request: &UpdateProgramRequest,
) -> Result<ProgramResponse> {
    let repo = ProgramRepository::new(pool, kind);

    let existing = repo.find_by_id(id).await?;
    let updated = repo.update(existing.program_id, &existing, request).await?;

    Ok(ProgramResponse::new(kind, updated))
}

/// Delete a program with its participations and their results
pub async fn delete_program(pool: &PgPool, kind: ProgramKind, id: Uuid) -> Result<()> {
    let repo = ProgramRepository::new(pool, kind);
    repo.delete(id).await
}
