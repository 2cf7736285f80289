use crate::{
    abstract_trait::payment::repository::query::PaymentQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::payment::{PaymentListModel, PaymentModel},
};
use anyhow::Result;
use async_trait::async_trait;
use sqlx::{Postgres, QueryBuilder};
use tracing::{error, info};

pub const PAGE_SIZE: i64 = 20;

pub struct PaymentQueryRepository {
    db: ConnectionPool,
}

impl PaymentQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

/// Builds the list query. A non-zero cursor is compared against the payer
/// join key, not the payment id.
fn list_query(user_id: i32, cursor: i32) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(
        r#"
        SELECT
            p.id,
            c.name AS category_name,
            a.name AS payer_name,
            p.payment_date,
            p.payment,
            p.created_at
        FROM payments p
        LEFT JOIN payers a ON p.payer_id = a.id
        LEFT JOIN categories c ON p.category_id = c.id
        WHERE p.user_id = "#,
    );
    builder.push_bind(user_id);

    if cursor != 0 {
        builder.push(" AND a.id < ").push_bind(cursor);
    }

    builder
        .push(" ORDER BY p.payment_date ASC, p.created_at DESC LIMIT ")
        .push_bind(PAGE_SIZE);

    builder
}

#[async_trait]
impl PaymentQueryRepositoryTrait for PaymentQueryRepository {
    async fn get_data(
        &self,
        user_id: i32,
        cursor: i32,
    ) -> Result<Vec<PaymentListModel>, RepositoryError> {
        info!("🔍 Fetching payments for user={user_id} cursor={cursor}");

        let mut builder = list_query(user_id, cursor);

        let rows = builder
            .build_query_as::<PaymentListModel>()
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch payments for user {user_id}: {e:?}");
                RepositoryError::from(e)
            })?;

        info!("✅ Retrieved {} payments", rows.len());

        Ok(rows)
    }

    async fn find_by_id(&self, payment_id: i32) -> Result<PaymentModel, RepositoryError> {
        sqlx::query_as::<_, PaymentModel>(
            r#"
            SELECT
                id,
                user_id,
                category_id,
                payer_id,
                description,
                payment_date,
                payment,
                created_at,
                updated_at
            FROM payments
            WHERE id = $1
            "#,
        )
        .bind(payment_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => RepositoryError::NotFound,
            _ => {
                error!("❌ Failed to fetch payment {payment_id}: {e:?}");
                RepositoryError::from(e)
            }
        })
    }

    async fn fetch_date(&self, user_id: i32) -> Result<Vec<String>, RepositoryError> {
        let months = sqlx::query_scalar::<_, String>(
            r#"
            SELECT to_char(payment_date AT TIME ZONE 'Asia/Tokyo', 'YYYY-MM') AS month
            FROM payments
            WHERE user_id = $1
            GROUP BY month
            ORDER BY month DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch payment months for user {user_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(sql: &str) -> String {
        sql.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn first_page_has_no_cursor_filter() {
        let builder = list_query(1, 0);
        let sql = normalized(builder.sql());

        assert!(sql.contains("WHERE p.user_id = $1 ORDER BY"));
        assert!(!sql.contains("a.id <"));
        assert!(sql.ends_with("LIMIT $2"));
    }

    #[test]
    fn cursor_filters_on_the_payer_key() {
        let builder = list_query(1, 40);
        let sql = normalized(builder.sql());

        assert!(sql.contains("WHERE p.user_id = $1 AND a.id < $2"));
        assert!(!sql.contains("p.id <"));
        assert!(sql.contains("ORDER BY p.payment_date ASC, p.created_at DESC"));
        assert!(sql.ends_with("LIMIT $3"));
    }
}
