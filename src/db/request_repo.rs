// src/db/request_repo.rs

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    common::error::AppError,
    db::RequestRepository,
    models::request::{ResolvedRequest, ServiceRequest},
};

// Parâmetros ligados por linha no INSERT
const BINDS_PER_ROW: usize = 8;
const INSERT_CHUNK_ROWS: usize = 1000;
const _: () = assert!(INSERT_CHUNK_ROWS * BINDS_PER_ROW <= u16::MAX as usize);

#[derive(Clone)]
pub struct PgRequestRepository {
    pool: PgPool,
}

impl PgRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RequestRepository for PgRequestRepository {
    async fn list_by_client(&self, client_id: i64) -> Result<Vec<ServiceRequest>, AppError> {
        // JOIN para devolver código e nome do serviço junto
        let requests = sqlx::query_as::<_, ServiceRequest>(
            r#"
            SELECT
                r.id, r.request_number,
                s.code AS service_code, s.name AS service_name,
                r.status, r.order_date, r.expected_date, r.price, r.notes
            FROM service_requests r
            INNER JOIN services s ON s.id = r.service_id
            WHERE r.client_id = $1
            ORDER BY r.order_date DESC, r.id ASC
            "#,
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(requests)
    }

    async fn replace_all(&self, client_id: i64, requests: &[ResolvedRequest]) -> Result<(), AppError> {
        // --- INÍCIO DA TRANSAÇÃO ---
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM service_requests WHERE client_id = $1")
            .bind(client_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        // INSERTs em lotes: o Postgres aceita no máximo 65535 parâmetros por comando.
        // Se algum falhar, o tx sofre rollback automático ao sair do escopo (drop)
        // e o DELETE acima é desfeito.
        for chunk in requests.chunks(INSERT_CHUNK_ROWS) {
            let mut insert: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO service_requests \
                 (client_id, service_id, request_number, status, order_date, expected_date, price, notes) ",
            );
            insert.push_values(chunk, |mut row, request| {
                row.push_bind(client_id)
                    .push_bind(request.service_id)
                    .push_bind(&request.request_number)
                    .push_bind(request.status)
                    .push_bind(request.order_date)
                    .push_bind(request.expected_date)
                    .push_bind(request.price)
                    .push_bind(request.notes.as_deref());
            });
            insert.build().execute(&mut *tx).await?;
        }

        tx.commit().await?;
        // --- FIM DA TRANSAÇÃO ---

        tracing::info!(
            "🔄 Solicitações do cliente {} substituídas ({} removidas, {} inseridas).",
            client_id,
            deleted,
            requests.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_chunks_stay_under_bind_limit() {
        assert!(INSERT_CHUNK_ROWS * BINDS_PER_ROW <= u16::MAX as usize);

        // Um carrinho cheio (9000 números) vira 9 comandos
        let full_cart = 9000usize;
        assert_eq!(full_cart.div_ceil(INSERT_CHUNK_ROWS), 9);
    }
}
