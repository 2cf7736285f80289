use crate::{
    errors::RepositoryError,
    model::payment::{PaymentListModel, PaymentModel},
};
use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use std::sync::Arc;

pub type DynPaymentQueryRepository = Arc<dyn PaymentQueryRepositoryTrait + Send + Sync>;

#[automock]
#[async_trait]
pub trait PaymentQueryRepositoryTrait {
    /// One page of the user's payments. A `cursor` of zero means the first page.
    async fn get_data(
        &self,
        user_id: i32,
        cursor: i32,
    ) -> Result<Vec<PaymentListModel>, RepositoryError>;
    async fn find_by_id(&self, payment_id: i32) -> Result<PaymentModel, RepositoryError>;
    /// Distinct `YYYY-MM` months with payments, most recent first.
    async fn fetch_date(&self, user_id: i32) -> Result<Vec<String>, RepositoryError>;
}
