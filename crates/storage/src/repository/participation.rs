use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::dto::participation::{
    ALREADY_REGISTERED, CreateParticipationRequest, DetailedParticipation,
};
use crate::error::{Result, StorageError};
use crate::models::{Participant, Participation};

use super::program::ProgramRepository;
use super::student::StudentRepository;
use super::team::TeamRepository;

const PARTICIPANT_GONE: &str = "The selected student or team no longer exists.";

pub struct ParticipationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ParticipationRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All participations with display names, newest first
    pub async fn list_detailed(&self) -> Result<Vec<DetailedParticipation>> {
        let participations = sqlx::query_as::<_, DetailedParticipation>(
            r#"
            SELECT participation_id, program_id, program_type, student_id, team_id,
                   group_name, created_at, program_title, student_name, admission_no, team_name
            FROM detailed_participations
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(participations)
    }

    /// Bare participation rows, read on the leaderboard's snapshot.
    pub async fn list_all(&self, conn: &mut PgConnection) -> Result<Vec<Participation>> {
        let participations = sqlx::query_as::<_, Participation>(
            r#"
            SELECT participation_id, program_id, program_type, student_id, team_id,
                   group_name, created_at
            FROM participations
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(participations)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Participation> {
        sqlx::query_as::<_, Participation>(
            r#"
            SELECT participation_id, program_id, program_type, student_id, team_id,
                   group_name, created_at
            FROM participations
            WHERE participation_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Register a participant for a program.
    ///
    /// The program has no foreign key, so its row is share-locked for the
    /// length of the insert instead. Individual entries must also fit the
    /// program's category.
    pub async fn create(&self, req: &CreateParticipationRequest) -> Result<Participation> {
        let participant = req.participant()?;

        let mut tx = self.pool.begin().await?;

        let program = ProgramRepository::new(self.pool, req.program_type)
            .find_for_share(&mut tx, req.program_id)
            .await?;

        match participant {
            Participant::Student(student_id) => {
                let student = StudentRepository::new(self.pool)
                    .find_by_id(student_id)
                    .await?;
                if !program.category.admits(student.category) {
                    return Err(StorageError::invalid_field(
                        "student_id",
                        "category_mismatch",
                        "The student's category is not eligible for this program.",
                    ));
                }
            }
            Participant::Team(team_id) => {
                TeamRepository::new(self.pool).find_by_id(team_id).await?;
            }
        }

        let participation = sqlx::query_as::<_, Participation>(
            r#"
            INSERT INTO participations (program_id, program_type, student_id, team_id, group_name)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING participation_id, program_id, program_type, student_id, team_id,
                      group_name, created_at
            "#,
        )
        .bind(req.program_id)
        .bind(req.program_type)
        .bind(participant.student_id())
        .bind(participant.team_id())
        .bind(&req.group_name)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            StorageError::from(e)
                .on_unique(ALREADY_REGISTERED)
                .on_foreign_key(PARTICIPANT_GONE)
        })?;

        tx.commit().await?;

        Ok(participation)
    }

    /// Delete a participation and its result, if any.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM participations WHERE participation_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM participations")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
