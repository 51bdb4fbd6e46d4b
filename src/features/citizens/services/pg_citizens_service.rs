//! PostgreSQL-backed citizen registry

use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::citizens::models::Citizen;
use crate::features::citizens::services::CitizensService;
use crate::shared::sql::contains_pattern;

pub struct PgCitizensService {
    pool: PgPool,
}

impl PgCitizensService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CitizensService for PgCitizensService {
    async fn get_all(&self) -> Result<Vec<Citizen>> {
        sqlx::query_as::<_, Citizen>(
            r#"
            SELECT citizen_id, full_name, address, email, phone
            FROM citizens
            ORDER BY full_name, citizen_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list citizens: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Citizen>> {
        sqlx::query_as::<_, Citizen>(
            r#"
            SELECT citizen_id, full_name, address, email, phone
            FROM citizens
            WHERE citizen_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get citizen {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<Citizen>> {
        let pattern = contains_pattern(name);

        sqlx::query_as::<_, Citizen>(
            r#"
            SELECT citizen_id, full_name, address, email, phone
            FROM citizens
            WHERE full_name ILIKE $1
            ORDER BY full_name, citizen_id
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to search citizens by name: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn create(&self, citizen: &Citizen) -> Result<()> {
        let citizen_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO citizens (full_name, address, email, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING citizen_id
            "#,
        )
        .bind(&citizen.full_name)
        .bind(&citizen.address)
        .bind(&citizen.email)
        .bind(&citizen.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert citizen: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Citizen registered: id={}", citizen_id);
        Ok(())
    }

    async fn update(&self, citizen: &Citizen) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE citizens
            SET full_name = $1, address = $2, email = $3, phone = $4, updated_at = NOW()
            WHERE citizen_id = $5
            "#,
        )
        .bind(&citizen.full_name)
        .bind(&citizen.address)
        .bind(&citizen.email)
        .bind(&citizen.phone)
        .bind(citizen.citizen_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update citizen {}: {:?}", citizen.citizen_id, e);
            AppError::Database(e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM citizens WHERE citizen_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete citizen {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
