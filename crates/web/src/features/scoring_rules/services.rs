use fest_storage::{
    error::Result,
    models::{Position, ScoringRule},
    repository::scoring_rule::ScoringRuleRepository,
};
use sqlx::PgPool;

pub async fn list_rules(pool: &PgPool) -> Result<Vec<ScoringRule>> {
    let repo = ScoringRuleRepository::new(pool);
    repo.list().await
}

/// Change the default points for a position. Existing results keep their points.
pub async fn update_rule(
    pool: &PgPool,
    position: Position,
    default_points: i32,
) -> Result<ScoringRule> {
    let repo = ScoringRuleRepository::new(pool);
    repo.upsert(position, default_points).await
}
