use crate::{
    domain::{
        requests::{CreatePaymentRequest, UpdatePaymentRequest},
        responses::PaymentResponse,
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use std::sync::Arc;

pub type DynPaymentCommandService = Arc<dyn PaymentCommandServiceTrait + Send + Sync>;

#[automock]
#[async_trait]
pub trait PaymentCommandServiceTrait {
    async fn create(
        &self,
        request: &CreatePaymentRequest,
        user_id: i32,
    ) -> Result<PaymentResponse, ServiceError>;
    async fn update(
        &self,
        request: &UpdatePaymentRequest,
        user_id: i32,
        payment_id: i32,
    ) -> Result<PaymentResponse, ServiceError>;
    async fn delete_by_id(&self, user_id: i32, payment_id: i32) -> Result<(), ServiceError>;
}
