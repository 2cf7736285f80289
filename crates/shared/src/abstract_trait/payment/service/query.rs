use crate::{
    domain::responses::{PaymentListResponse, PaymentResponse},
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use std::sync::Arc;

pub type DynPaymentQueryService = Arc<dyn PaymentQueryServiceTrait + Send + Sync>;

#[automock]
#[async_trait]
pub trait PaymentQueryServiceTrait {
    async fn get_data(
        &self,
        user_id: i32,
        cursor: i32,
    ) -> Result<Vec<PaymentListResponse>, ServiceError>;
    async fn find_by_id(
        &self,
        user_id: i32,
        payment_id: i32,
    ) -> Result<PaymentResponse, ServiceError>;
    async fn fetch_date(&self, user_id: i32) -> Result<Vec<String>, ServiceError>;
}
