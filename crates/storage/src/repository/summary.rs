use sqlx::PgPool;

use crate::dto::summary::{ProgramCounts, SummaryResponse};
use crate::error::Result;
use crate::models::ProgramKind;

use super::participation::ParticipationRepository;
use super::program::ProgramRepository;
use super::result::ResultRepository;
use super::student::StudentRepository;
use super::team::TeamRepository;

pub struct SummaryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SummaryRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn count_programs(&self) -> Result<ProgramCounts> {
        let mut counts = ProgramCounts::default();

        for kind in ProgramKind::ALL {
            let count = ProgramRepository::new(self.pool, kind).count().await?;
            match kind {
                ProgramKind::Stage => counts.stage = count,
                ProgramKind::Nonstage => counts.nonstage = count,
                ProgramKind::Sports => counts.sports = count,
            }
            counts.total += count;
        }

        Ok(counts)
    }

    pub async fn get_summary(&self) -> Result<SummaryResponse> {
        Ok(SummaryResponse {
            teams: TeamRepository::new(self.pool).count().await?,
            students: StudentRepository::new(self.pool).count().await?,
            programs: self.count_programs().await?,
            participations: ParticipationRepository::new(self.pool).count().await?,
            results: ResultRepository::new(self.pool).count().await?,
        })
    }
}
