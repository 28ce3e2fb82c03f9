use fest_storage::{
    dto::leaderboard::LeaderboardEntry, error::Result,
    repository::leaderboard::LeaderboardRepository,
};
use sqlx::PgPool;

/// Team standings by total points
pub async fn get_leaderboard(pool: &PgPool) -> Result<Vec<LeaderboardEntry>> {
    let repo = LeaderboardRepository::new(pool);
    repo.get_leaderboard().await
}
