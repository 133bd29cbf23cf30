//! PostgreSQL implementation of DatoRepository

use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use sqlx::PgPool;
use uuid::Uuid;

use dato::{Dato, DatoRepository, DatoStream, DomainError};

/// PostgreSQL implementation of DatoRepository
pub struct PgDatoRepository {
    pool: PgPool,
}

impl PgDatoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct DatoRow {
    id: String,
    information: String,
}

impl From<DatoRow> for Dato {
    fn from(row: DatoRow) -> Self {
        Self {
            id: Some(row.id),
            information: row.information,
        }
    }
}

#[async_trait]
impl DatoRepository for PgDatoRepository {
    async fn save(&self, dato: &Dato) -> Result<Dato, DomainError> {
        let id = dato
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let row = sqlx::query_as::<_, DatoRow>(
            r#"
            INSERT INTO datos (id, information)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET information = EXCLUDED.information
            RETURNING id, information
            "#,
        )
        .bind(&id)
        .bind(&dato.information)
        .fetch_one(&self.pool)
        .await
        .map_err(DomainError::repository)?;

        Ok(row.into())
    }

    fn find_all(&self) -> DatoStream<'_> {
        sqlx::query_as::<_, DatoRow>("SELECT id, information FROM datos ORDER BY created_at, id")
            .fetch(&self.pool)
            .map_ok(Dato::from)
            .map_err(DomainError::repository)
            .boxed()
    }
}
