// src/db/catalog_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::CatalogRepository,
    models::catalog::{NewService, Service},
};

#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository for PgCatalogRepository {
    async fn list(&self) -> Result<Vec<Service>, AppError> {
        let services = sqlx::query_as::<_, Service>(
            r#"
            SELECT id, code, name, description, price, lead_days, created_at
            FROM services
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(services)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Service>, AppError> {
        let service = sqlx::query_as::<_, Service>(
            r#"
            SELECT id, code, name, description, price, lead_days, created_at
            FROM services
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(service)
    }

    async fn create(&self, service: &NewService) -> Result<Service, AppError> {
        let created = sqlx::query_as::<_, Service>(
            r#"
            INSERT INTO services (code, name, description, price, lead_days)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, code, name, description, price, lead_days, created_at
            "#,
        )
        .bind(&service.code)
        .bind(&service.name)
        .bind(service.description.as_deref())
        .bind(service.price)
        .bind(service.lead_days)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Tratamento de erro de código duplicado
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::ServiceCodeAlreadyExists;
                }
            }
            e.into()
        })?;

        Ok(created)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM services")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }
}
