use crate::{
    abstract_trait::payment::{
        repository::query::DynPaymentQueryRepository, service::query::PaymentQueryServiceTrait,
    },
    domain::responses::{PaymentListResponse, PaymentResponse},
    errors::{RepositoryError, ServiceError},
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info, warn};

pub struct PaymentQueryService {
    query: DynPaymentQueryRepository,
}

impl PaymentQueryService {
    pub fn new(query: DynPaymentQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl PaymentQueryServiceTrait for PaymentQueryService {
    async fn get_data(
        &self,
        user_id: i32,
        cursor: i32,
    ) -> Result<Vec<PaymentListResponse>, ServiceError> {
        let payments = self.query.get_data(user_id, cursor).await.map_err(|e| {
            error!("❌ Failed to list payments for user {user_id}: {e}");
            ServiceError::Internal
        })?;

        info!("📄 Listed {} payments for user={user_id}", payments.len());

        Ok(payments.into_iter().map(PaymentListResponse::from).collect())
    }

    async fn find_by_id(
        &self,
        user_id: i32,
        payment_id: i32,
    ) -> Result<PaymentResponse, ServiceError> {
        let payment = self
            .query
            .find_by_id(payment_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ServiceError::NotFound,
                other => {
                    error!("❌ Failed to find payment {payment_id}: {other}");
                    ServiceError::Internal
                }
            })?;

        // Someone else's payment reads the same as a missing one.
        if payment.user_id != user_id {
            warn!("⛔ User {user_id} asked for payment {payment_id} of another user");
            return Err(ServiceError::NotFound);
        }

        Ok(PaymentResponse::from(payment))
    }

    async fn fetch_date(&self, user_id: i32) -> Result<Vec<String>, ServiceError> {
        self.query.fetch_date(user_id).await.map_err(|e| {
            error!("❌ Failed to fetch payment months for user {user_id}: {e}");
            ServiceError::Internal
        })
    }
}
