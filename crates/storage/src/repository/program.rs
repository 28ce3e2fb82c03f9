use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::program::{CreateProgramRequest, UpdateProgramRequest};
use crate::error::{Result, StorageError};
use crate::models::{Program, ProgramKind};

const PROGRAM_TITLE_TAKEN: &str = "A program with this title already exists.";

/// One repository for all three program tables; `kind` picks the table.
pub struct ProgramRepository<'a> {
    pool: &'a PgPool,
    kind: ProgramKind,
}

impl<'a> ProgramRepository<'a> {
    pub fn new(pool: &'a PgPool, kind: ProgramKind) -> Self {
        Self { pool, kind }
    }

    /// List programs of this kind by title
    pub async fn list(&self) -> Result<Vec<Program>> {
        let mut query =
            QueryBuilder::<Postgres>::new("SELECT program_id, title, category, created_at FROM ");
        query.push(self.kind.as_table());
        query.push(" ORDER BY title");

        let programs = query
            .build_query_as::<Program>()
            .fetch_all(self.pool)
            .await?;

        Ok(programs)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Program> {
        let mut query =
            QueryBuilder::<Postgres>::new("SELECT program_id, title, category, created_at FROM ");
        query.push(self.kind.as_table());
        query.push(" WHERE program_id = ");
        query.push_bind(id);

        query
            .build_query_as::<Program>()
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    /// Read a program and hold a share lock on its row until the caller's
    /// transaction ends, so it cannot be deleted underneath a registration.
    pub async fn find_for_share(&self, conn: &mut PgConnection, id: Uuid) -> Result<Program> {
        let mut query =
            QueryBuilder::<Postgres>::new("SELECT program_id, title, category, created_at FROM ");
        query.push(self.kind.as_table());
        query.push(" WHERE program_id = ");
        query.push_bind(id);
        query.push(" FOR SHARE");

        query
            .build_query_as::<Program>()
            .fetch_optional(&mut *conn)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn create(&self, req: &CreateProgramRequest) -> Result<Program> {
        let mut query = QueryBuilder::<Postgres>::new("INSERT INTO ");
        query.push(self.kind.as_table());
        query.push(" (title, category) VALUES (");
        query.push_bind(req.title.trim());
        query.push(", ");
        query.push_bind(req.category);
        query.push(") RETURNING program_id, title, category, created_at");

        let program = query
            .build_query_as::<Program>()
            .fetch_one(self.pool)
            .await
            .map_err(|e| StorageError::from(e).on_unique(PROGRAM_TITLE_TAKEN))?;

        Ok(program)
    }

    pub async fn update(
        &self,
        id: Uuid,
        existing: &Program,
        req: &UpdateProgramRequest,
    ) -> Result<Program> {
        let title = req
            .title
            .as_deref()
            .map(str::trim)
            .unwrap_or(&existing.title);
        let category = req.category.unwrap_or(existing.category);

        let mut query = QueryBuilder::<Postgres>::new("UPDATE ");
        query.push(self.kind.as_table());
        query.push(" SET title = ");
        query.push_bind(title);
        query.push(", category = ");
        query.push_bind(category);
        query.push(" WHERE program_id = ");
        query.push_bind(id);
        query.push(" RETURNING program_id, title, category, created_at");

        query
            .build_query_as::<Program>()
            .fetch_optional(self.pool)
            .await
            .map_err(|e| StorageError::from(e).on_unique(PROGRAM_TITLE_TAKEN))?
            .ok_or(StorageError::NotFound)
    }

    /// Delete a program along with its participations (and their results).
    ///
    /// The program row is locked first; registrations still holding a share
    /// lock on it finish before the participations are removed.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let mut lock = QueryBuilder::<Postgres>::new("SELECT program_id FROM ");
        lock.push(self.kind.as_table());
        lock.push(" WHERE program_id = ");
        lock.push_bind(id);
        lock.push(" FOR UPDATE");

        lock.build_query_scalar::<Uuid>()
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(StorageError::NotFound)?;

        sqlx::query("DELETE FROM participations WHERE program_id = $1 AND program_type = $2")
            .bind(id)
            .bind(self.kind)
            .execute(&mut *tx)
            .await?;

        let mut query = QueryBuilder::<Postgres>::new("DELETE FROM ");
        query.push(self.kind.as_table());
        query.push(" WHERE program_id = ");
        query.push_bind(id);

        query.build().execute(&mut *tx).await?;

        tx.commit().await?;

        Ok(())
    }

    pub async fn count(&self) -> Result<i64> {
        let mut query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM ");
        query.push(self.kind.as_table());

        let count = query
            .build_query_scalar::<i64>()
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
