use crate::{
    abstract_trait::payment::repository::command::PaymentCommandRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::payment::{DeleteOutcome, PaymentDraft, PaymentModel},
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info, warn};

pub struct PaymentCommandRepository {
    db: ConnectionPool,
}

impl PaymentCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl PaymentCommandRepositoryTrait for PaymentCommandRepository {
    async fn create(&self, payment: &PaymentDraft) -> Result<PaymentModel, RepositoryError> {
        let mut conn = self.get_conn().await?;
        let now = Utc::now();

        let created = sqlx::query_as::<_, PaymentModel>(
            r#"
            INSERT INTO payments (
                user_id,
                category_id,
                payer_id,
                description,
                payment_date,
                payment,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING
                id,
                user_id,
                category_id,
                payer_id,
                description,
                payment_date,
                payment,
                created_at,
                updated_at
            "#,
        )
        .bind(payment.user_id)
        .bind(payment.category_id)
        .bind(payment.payer_id)
        .bind(payment.description.as_deref())
        .bind(payment.payment_date)
        .bind(payment.payment)
        .bind(now)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to create payment for user {}: {e:?}",
                payment.user_id
            );
            RepositoryError::from(e)
        })?;

        info!("✅ Created payment id={} user={}", created.id, created.user_id);

        Ok(created)
    }

    async fn update(&self, payment: &PaymentDraft) -> Result<PaymentModel, RepositoryError> {
        let mut conn = self.get_conn().await?;
        let now = Utc::now();

        let updated = sqlx::query_as::<_, PaymentModel>(
            r#"
            UPDATE payments
            SET
                category_id = $3,
                payer_id = $4,
                description = $5,
                payment_date = $6,
                payment = $7,
                updated_at = $8
            WHERE id = $1 AND user_id = $2
            RETURNING
                id,
                user_id,
                category_id,
                payer_id,
                description,
                payment_date,
                payment,
                created_at,
                updated_at
            "#,
        )
        .bind(payment.id)
        .bind(payment.user_id)
        .bind(payment.category_id)
        .bind(payment.payer_id)
        .bind(payment.description.as_deref())
        .bind(payment.payment_date)
        .bind(payment.payment)
        .bind(now)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                warn!(
                    "❌ Payment {} not found for user {}",
                    payment.id, payment.user_id
                );
                RepositoryError::NotFound
            }
            _ => {
                error!("❌ Failed to update payment {}: {e:?}", payment.id);
                RepositoryError::from(e)
            }
        })?;

        info!("✅ Updated payment id={}", updated.id);

        Ok(updated)
    }

    async fn delete_by_id(
        &self,
        user_id: i32,
        payment_id: i32,
    ) -> Result<DeleteOutcome, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let owner = sqlx::query_scalar::<_, i32>("SELECT user_id FROM payments WHERE id = $1")
            .bind(payment_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to load payment {payment_id}: {e:?}");
                RepositoryError::from(e)
            })?;

        match owner {
            None => {
                warn!("❌ Payment {payment_id} does not exist");
                return Ok(DeleteOutcome::NotFound);
            }
            Some(owner_id) if owner_id != user_id => {
                warn!("⛔ User {user_id} tried to delete payment {payment_id} owned by {owner_id}");
                return Ok(DeleteOutcome::NotOwner);
            }
            Some(_) => {}
        }

        let result = sqlx::query("DELETE FROM payments WHERE id = $1 AND user_id = $2")
            .bind(payment_id)
            .bind(user_id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete payment {payment_id}: {e:?}");
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            warn!("❌ Payment {payment_id} vanished before it could be deleted");
            return Ok(DeleteOutcome::NotFound);
        }

        info!("🗑️ Deleted payment id={payment_id} user={user_id}");

        Ok(DeleteOutcome::Deleted)
    }
}
