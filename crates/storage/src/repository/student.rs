use chrono::{Datelike, Utc};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::dto::student::{CreateStudentRequest, StudentResponse, UpdateStudentRequest};
use crate::error::{Result, StorageError};
use crate::models::Student;

const STUDENT_TAKEN: &str = "A student with this admission number or fest id already exists.";
const UNKNOWN_TEAM: &str = "The selected team does not exist.";

pub struct StudentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StudentRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all students with their team name
    pub async fn list(&self) -> Result<Vec<StudentResponse>> {
        let students = sqlx::query_as::<_, StudentResponse>(
            r#"
            SELECT s.student_id, s.name, s.admission_no, s.class, s.category,
                   s.fest_id, s.team_id, t.name AS team_name, s.created_at
            FROM students s
            LEFT JOIN teams t ON t.team_id = s.team_id
            ORDER BY s.name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(students)
    }

    /// Bare student rows, read on the leaderboard's snapshot.
    pub async fn list_all(&self, conn: &mut PgConnection) -> Result<Vec<Student>> {
        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT student_id, name, admission_no, class, category, fest_id, team_id, created_at
            FROM students
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(students)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Student> {
        sqlx::query_as::<_, Student>(
            r#"
            SELECT student_id, name, admission_no, class, category, fest_id, team_id, created_at
            FROM students
            WHERE student_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn find_detailed(&self, id: Uuid) -> Result<StudentResponse> {
        sqlx::query_as::<_, StudentResponse>(
            r#"
            SELECT s.student_id, s.name, s.admission_no, s.class, s.category,
                   s.fest_id, s.team_id, t.name AS team_name, s.created_at
            FROM students s
            LEFT JOIN teams t ON t.team_id = s.team_id
            WHERE s.student_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Create a student; without an explicit fest id one is derived from the
    /// admission number and the current year.
    pub async fn create(&self, req: &CreateStudentRequest) -> Result<Student> {
        let fest_id = req.fest_id_or_default(Utc::now().year());

        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (name, admission_no, class, category, fest_id, team_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING student_id, name, admission_no, class, category, fest_id, team_id, created_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.admission_no)
        .bind(&req.class)
        .bind(req.category)
        .bind(&fest_id)
        .bind(req.team_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e)
                .on_unique(STUDENT_TAKEN)
                .on_foreign_key(UNKNOWN_TEAM)
        })?;

        Ok(student)
    }

    pub async fn update(
        &self,
        id: Uuid,
        existing: &Student,
        req: &UpdateStudentRequest,
    ) -> Result<Student> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let admission_no = req.admission_no.as_ref().unwrap_or(&existing.admission_no);
        let class = req.class.as_ref().unwrap_or(&existing.class);
        let category = req.category.unwrap_or(existing.category);
        let fest_id = req.fest_id.as_ref().unwrap_or(&existing.fest_id);
        let team_id = req.team_id.unwrap_or(existing.team_id);

        sqlx::query_as::<_, Student>(
            r#"
            UPDATE students
            SET name = $2,
                admission_no = $3,
                class = $4,
                category = $5,
                fest_id = $6,
                team_id = $7
            WHERE student_id = $1
            RETURNING student_id, name, admission_no, class, category, fest_id, team_id, created_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(admission_no)
        .bind(class)
        .bind(category)
        .bind(fest_id)
        .bind(team_id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e)
                .on_unique(STUDENT_TAKEN)
                .on_foreign_key(UNKNOWN_TEAM)
        })?
        .ok_or(StorageError::NotFound)
    }

    /// Delete a student; their participations and results go with them.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM students WHERE student_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
