use sqlx::PgPool;

use crate::error::Result;
use crate::models::{Position, ScoringRule};

pub struct ScoringRuleRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScoringRuleRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<ScoringRule>> {
        let rules = sqlx::query_as::<_, ScoringRule>(
            "SELECT position, default_points FROM scoring_rules ORDER BY position",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rules)
    }

    /// Set the default points for a position, creating the rule if missing.
    pub async fn upsert(&self, position: Position, default_points: i32) -> Result<ScoringRule> {
        let rule = sqlx::query_as::<_, ScoringRule>(
            r#"
            INSERT INTO scoring_rules (position, default_points)
            VALUES ($1, $2)
            ON CONFLICT (position)
            DO UPDATE SET default_points = EXCLUDED.default_points
            RETURNING position, default_points
            "#,
        )
        .bind(position)
        .bind(default_points)
        .fetch_one(self.pool)
        .await?;

        Ok(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "./migrations")]
    async fn defaults_are_seeded_and_editable(pool: PgPool) {
        let repo = ScoringRuleRepository::new(&pool);

        let points: Vec<(Position, i32)> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|rule| (rule.position, rule.default_points))
            .collect();
        assert_eq!(
            points,
            vec![(Position::First, 10), (Position::Second, 7), (Position::Third, 5)]
        );

        let rule = repo.upsert(Position::First, 12).await.unwrap();
        assert_eq!(rule.default_points, 12);
        assert_eq!(repo.list().await.unwrap()[0].default_points, 12);
    }
}
