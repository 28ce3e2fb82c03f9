use sqlx::PgPool;

use crate::dto::leaderboard::LeaderboardEntry;
use crate::error::Result;
use crate::services::leaderboard::aggregate;

use super::participation::ParticipationRepository;
use super::result::ResultRepository;
use super::student::StudentRepository;
use super::team::TeamRepository;

/// Standings are recomputed from the current rows on every read.
pub struct LeaderboardRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LeaderboardRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Standings from one consistent snapshot of the four tables.
    pub async fn get_leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let teams = TeamRepository::new(self.pool).list_all(&mut tx).await?;
        let students = StudentRepository::new(self.pool).list_all(&mut tx).await?;
        let participations = ParticipationRepository::new(self.pool)
            .list_all(&mut tx)
            .await?;
        let results = ResultRepository::new(self.pool).list_all(&mut tx).await?;

        tx.commit().await?;

        Ok(aggregate(&teams, &students, &participations, &results))
    }
}
