use fest_storage::{
    dto::participation::{CreateParticipationRequest, DetailedParticipation},
    error::Result,
    models::Participation,
    repository::participation::ParticipationRepository,
};
use sqlx::PgPool;
use uuid::Uuid;

/// List participations with program and participant names, newest first
pub async fn list_participations(pool: &PgPool) -> Result<Vec<DetailedParticipation>> {
    let repo = ParticipationRepository::new(pool);
    repo.list_detailed().await
}

/// Register a student or team for a program
pub async fn create_participation(
    pool: &PgPool,
    request: &CreateParticipationRequest,
) -> Result<Participation> {
    let repo = ParticipationRepository::new(pool);
    repo.create(request).await
}

/// Delete a participation and its result
pub async fn delete_participation(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = ParticipationRepository::new(pool);
    repo.delete(id).await
}
