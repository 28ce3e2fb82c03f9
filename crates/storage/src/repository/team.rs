use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::dto::team::{CreateTeamRequest, UpdateTeamRequest};
use crate::error::{Result, StorageError};
use crate::models::Team;

const TEAM_NAME_TAKEN: &str = "A team with this name already exists.";
const TEAM_IN_USE: &str = "Team still has students or participations assigned.";

/// Repository for Team database operations
pub struct TeamRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TeamRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all teams by name
    pub async fn list(&self) -> Result<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(
            r#"
            SELECT team_id, name, created_at
            FROM teams
            ORDER BY name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(teams)
    }

    /// Same rows as [`Self::list`], read on the caller's connection.
    pub async fn list_all(&self, conn: &mut PgConnection) -> Result<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(
            "SELECT team_id, name, created_at FROM teams ORDER BY name",
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(teams)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Team> {
        sqlx::query_as::<_, Team>(
            r#"
            SELECT team_id, name, created_at
            FROM teams
            WHERE team_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn create(&self, req: &CreateTeamRequest) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (name)
            VALUES ($1)
            RETURNING team_id, name, created_at
            "#,
        )
        .bind(req.name.trim())
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique(TEAM_NAME_TAKEN))?;

        Ok(team)
    }

    pub async fn update(&self, id: Uuid, existing: &Team, req: &UpdateTeamRequest) -> Result<Team> {
        let name = req
            .name
            .as_deref()
            .map(str::trim)
            .unwrap_or(&existing.name);

        sqlx::query_as::<_, Team>(
            r#"
            UPDATE teams
            SET name = $2
            WHERE team_id = $1
            RETURNING team_id, name, created_at
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique(TEAM_NAME_TAKEN))?
        .ok_or(StorageError::NotFound)
    }

    /// Delete a team that nothing references any more.
    ///
    /// The reference check and the delete share a transaction so a failed
    /// delete leaves every row in place.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let referenced: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(SELECT 1 FROM students WHERE team_id = $1)
                OR EXISTS(SELECT 1 FROM participations WHERE team_id = $1)
            "#,
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        if referenced {
            return Err(StorageError::Referenced(TEAM_IN_USE.to_string()));
        }

        let result = sqlx::query("DELETE FROM teams WHERE team_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| StorageError::from(e).on_foreign_key(TEAM_IN_USE))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM teams")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
