//! PostgreSQL-backed complaint store

use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::complaints::models::Complaint;
use crate::features::complaints::services::ComplaintsService;
use crate::shared::sql::contains_pattern;

/// Complaint columns joined with the filing citizen's name
const SELECT_COMPLAINTS: &str = r#"
    SELECT c.complaint_id, c.citizen_id, c.title, c.description, c.status, c.date_filed,
           z.full_name AS citizen_name
    FROM complaints c
    LEFT JOIN citizens z ON z.citizen_id = c.citizen_id
"#;

/// Map constraint violations on write to client errors
fn handle_write_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        // Foreign key violation (PostgreSQL error code 23503)
        if db_err.code() == Some(std::borrow::Cow::Borrowed("23503")) {
            return AppError::BadRequest("Referenced citizen does not exist.".to_string());
        }
    }

    AppError::Database(e)
}

pub struct PgComplaintsService {
    pool: PgPool,
}

impl PgComplaintsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ComplaintsService for PgComplaintsService {
    async fn get_all(&self) -> Result<Vec<Complaint>> {
        let query = format!(
            "{} ORDER BY c.date_filed DESC, c.complaint_id DESC",
            SELECT_COMPLAINTS
        );

        sqlx::query_as::<_, Complaint>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list complaints: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Complaint>> {
        let query = format!("{} WHERE c.complaint_id = $1", SELECT_COMPLAINTS);

        sqlx::query_as::<_, Complaint>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get complaint {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    async fn search_by_title(&self, title: &str) -> Result<Vec<Complaint>> {
        let query = format!(
            "{} WHERE c.title ILIKE $1 ORDER BY c.date_filed DESC, c.complaint_id DESC",
            SELECT_COMPLAINTS
        );

        sqlx::query_as::<_, Complaint>(&query)
            .bind(contains_pattern(title))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to search complaints by title: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn create(&self, complaint: &Complaint) -> Result<()> {
        let complaint_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO complaints (citizen_id, title, description, status, date_filed)
            VALUES ($1, $2, $3, $4, COALESCE($5, CURRENT_DATE))
            RETURNING complaint_id
            "#,
        )
        .bind(complaint.citizen_id)
        .bind(&complaint.title)
        .bind(&complaint.description)
        .bind(complaint.status)
        .bind(complaint.date_filed)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert complaint: {:?}", e);
            handle_write_error(e)
        })?;

        tracing::info!(
            "Complaint filed: id={}, citizen_id={}",
            complaint_id,
            complaint.citizen_id
        );
        Ok(())
    }

    async fn update(&self, complaint: &Complaint) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE complaints
            SET citizen_id = $1, title = $2, description = $3, status = $4,
                date_filed = COALESCE($5, date_filed), updated_at = NOW()
            WHERE complaint_id = $6
            "#,
        )
        .bind(complaint.citizen_id)
        .bind(&complaint.title)
        .bind(&complaint.description)
        .bind(complaint.status)
        .bind(complaint.date_filed)
        .bind(complaint.complaint_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to update complaint {}: {:?}",
                complaint.complaint_id,
                e
            );
            handle_write_error(e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM complaints WHERE complaint_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete complaint {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
