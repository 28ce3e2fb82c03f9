use std::collections::HashSet;

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::dto::result::{ALREADY_SCORED, DetailedResult};
use crate::error::{Result, StorageError};
use crate::models::ProgramResult;
use crate::services::scoring::ResultOutcome;

const UNKNOWN_PARTICIPATION: &str = "The selected participation does not exist.";

pub struct ResultRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ResultRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All results with program and participant names, newest first
    pub async fn list_detailed(&self) -> Result<Vec<DetailedResult>> {
        let results = sqlx::query_as::<_, DetailedResult>(
            r#"
            SELECT result_id, participation_id, position, grade, points_awarded, created_at,
                   program_id, program_type, program_title, student_name, team_name, group_name
            FROM detailed_results
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(results)
    }

    /// Bare result rows, read on the leaderboard's snapshot.
    pub async fn list_all(&self, conn: &mut PgConnection) -> Result<Vec<ProgramResult>> {
        let results = sqlx::query_as::<_, ProgramResult>(
            r#"
            SELECT result_id, participation_id, position, grade, points_awarded, created_at
            FROM results
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(results)
    }

    /// Ids of participations that already carry a result.
    pub async fn scored_participation_ids(&self) -> Result<HashSet<Uuid>> {
        let ids = sqlx::query_scalar::<_, Uuid>("SELECT participation_id FROM results")
            .fetch_all(self.pool)
            .await?;

        Ok(ids.into_iter().collect())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<ProgramResult> {
        sqlx::query_as::<_, ProgramResult>(
            r#"
            SELECT result_id, participation_id, position, grade, points_awarded, created_at
            FROM results
            WHERE result_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Insert a result; a participation can be scored only once.
    pub async fn create(
        &self,
        participation_id: Uuid,
        outcome: &ResultOutcome,
    ) -> Result<ProgramResult> {
        let result = sqlx::query_as::<_, ProgramResult>(
            r#"
            INSERT INTO results (participation_id, position, grade, points_awarded)
            VALUES ($1, $2, $3, $4)
            RETURNING result_id, participation_id, position, grade, points_awarded, created_at
            "#,
        )
        .bind(participation_id)
        .bind(outcome.position)
        .bind(outcome.grade)
        .bind(outcome.points_awarded)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e)
                .on_unique(ALREADY_SCORED)
                .on_foreign_key(UNKNOWN_PARTICIPATION)
        })?;

        Ok(result)
    }

    pub async fn update(&self, id: Uuid, outcome: &ResultOutcome) -> Result<ProgramResult> {
        sqlx::query_as::<_, ProgramResult>(
            r#"
            UPDATE results
            SET position = $2,
                grade = $3,
                points_awarded = $4
            WHERE result_id = $1
            RETURNING result_id, participation_id, position, grade, points_awarded, created_at
            "#,
        )
        .bind(id)
        .bind(outcome.position)
        .bind(outcome.grade)
        .bind(outcome.points_awarded)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM results WHERE result_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM results")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Grade, Position, ProgramCategory, ProgramKind};
    use crate::repository::fixtures;
    use crate::repository::participation::ParticipationRepository;

    fn first_place(points: i32) -> ResultOutcome {
        ResultOutcome {
            position: Some(Position::First),
            grade: None,
            points_awarded: points,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn participation_is_scored_only_once(pool: PgPool) {
        let red = fixtures::team(&pool, "Red").await;
        let relay =
            fixtures::program(&pool, ProgramKind::Sports, "Relay", ProgramCategory::All).await;
        let entry = fixtures::enter_team(&pool, ProgramKind::Sports, &relay, &red).await;

        let repo = ResultRepository::new(&pool);
        repo.create(entry.participation_id, &first_place(10))
            .await
            .unwrap();

        let second = ResultOutcome {
            position: None,
            grade: Some(Grade::A),
            points_awarded: 0,
        };
        let err = repo
            .create(entry.participation_id, &second)
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::ConstraintViolation(ref msg) if msg == ALREADY_SCORED));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn unknown_participation_is_a_referential_error(pool: PgPool) {
        let err = ResultRepository::new(&pool)
            .create(Uuid::new_v4(), &first_place(10))
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::Referenced(ref msg) if msg == UNKNOWN_PARTICIPATION));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn result_goes_with_its_participation(pool: PgPool) {
        let red = fixtures::team(&pool, "Red").await;
        let relay =
            fixtures::program(&pool, ProgramKind::Sports, "Relay", ProgramCategory::All).await;
        let entry = fixtures::enter_team(&pool, ProgramKind::Sports, &relay, &red).await;
        let repo = ResultRepository::new(&pool);
        repo.create(entry.participation_id, &first_place(10))
            .await
            .unwrap();

        ParticipationRepository::new(&pool)
            .delete(entry.participation_id)
            .await
            .unwrap();

        assert_eq!(repo.count().await.unwrap(), 0);
        assert!(repo.scored_participation_ids().await.unwrap().is_empty());
    }
}
