use fest_storage::{
    dto::team::{CreateTeamRequest, UpdateTeamRequest},
    error::Result,
    models::Team,
    repository::team::TeamRepository,
};
use sqlx::PgPool;
use uuid::Uuid;

/// List all teams
pub async fn list_teams(pool: &PgPool) -> Result<Vec<Team>> {
    let repo = TeamRepository::new(pool);
    repo.list().await
}

/// Get team by id
pub async fn get_team(pool: &PgPool, id: Uuid) -> Result<Team> {
    let repo = TeamRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new team
pub async fn create_team(pool: &PgPool, request: &CreateTeamRequest) -> Result<Team> {
    let repo = TeamRepository::new(pool);
    repo.create(request).await
}

/// Update a team
pub async fn update_team(pool: &PgPool, id: Uuid, request: &UpdateTeamRequest) -> Result<Team> {
    let repo = TeamRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    repo.update(existing.team_id, &existing, request).await
}

/// Delete a team no student or participation refers to
pub async fn delete_team(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = TeamRepository::new(pool);
    repo.delete(id).await
}
