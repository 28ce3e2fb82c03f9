use fest_storage::{
    dto::{
        participation::UnscoredParticipation,
        result::{CreateResultRequest, DetailedResult, UpdateResultRequest},
    },
    error::Result,
    models::ProgramResult,
    repository::{
        participation::ParticipationRepository, result::ResultRepository,
        scoring_rule::ScoringRuleRepository,
    },
    services::{resolver::unscored_participations, scoring},
};
use sqlx::PgPool;
use uuid::Uuid;

/// List results with program and participant names, newest first
pub async fn list_results(pool: &PgPool) -> Result<Vec<DetailedResult>> {
    let repo = ResultRepository::new(pool);
    repo.list_detailed().await
}

/// Participations that can still receive a result
pub async fn list_unscored(pool: &PgPool) -> Result<Vec<UnscoredParticipation>> {
    let scored = ResultRepository::new(pool).scored_participation_ids().await?;
    let participations = ParticipationRepository::new(pool).list_detailed().await?;

    Ok(unscored_participations(participations, &scored))
}

/// Record a result, deriving points from the scoring rules when not given.
///
/// The position/grade check runs before any query.
pub async fn create_result(pool: &PgPool, request: &CreateResultRequest) -> Result<ProgramResult> {
    scoring::ensure_outcome(request.position, request.grade)?;

    ParticipationRepository::new(pool)
        .find_by_id(request.participation_id)
        .await?;

    let rules = ScoringRuleRepository::new(pool).list().await?;
    let outcome = scoring::outcome_for_create(request, &rules)?;

    let repo = ResultRepository::new(pool);
    repo.create(request.participation_id, &outcome).await
}

pub async fn update_result(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateResultRequest,
) -> Result<ProgramResult> {
    let repo = ResultRepository::new(pool);
    let existing = repo.find_by_id(id).await?;

    let rules = ScoringRuleRepository::new(pool).list().await?;
    let outcome = scoring::outcome_for_update(&existing, request, &rules)?;

    repo.update(existing.result_id, &outcome).await
}

pub async fn delete_result(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = ResultRepository::new(pool);
    repo.delete(id).await
}
