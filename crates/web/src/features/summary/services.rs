use fest_storage::{
    dto::summary::SummaryResponse, error::Result, repository::summary::SummaryRepository,
};
use sqlx::PgPool;

pub async fn get_summary(pool: &PgPool) -> Result<SummaryResponse> {
    let repo = SummaryRepository::new(pool);
    repo.get_summary().await
}
