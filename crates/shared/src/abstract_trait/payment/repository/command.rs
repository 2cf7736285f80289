use crate::{
    errors::RepositoryError,
    model::payment::{DeleteOutcome, PaymentDraft, PaymentModel},
};
use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use std::sync::Arc;

pub type DynPaymentCommandRepository = Arc<dyn PaymentCommandRepositoryTrait + Send + Sync>;

#[automock]
#[async_trait]
pub trait PaymentCommandRepositoryTrait {
    /// Inserts a new row; `created_at` and `updated_at` are both set to now.
    async fn create(&self, payment: &PaymentDraft) -> Result<PaymentModel, RepositoryError>;
    /// Overwrites the mutable fields of the caller's payment and refreshes
    /// `updated_at`. A missing or foreign row is `RepositoryError::NotFound`.
    async fn update(&self, payment: &PaymentDraft) -> Result<PaymentModel, RepositoryError>;
    async fn delete_by_id(
        &self,
        user_id: i32,
        payment_id: i32,
    ) -> Result<DeleteOutcome, RepositoryError>;
}
