use crate::errors::{RepositoryError, ServiceError};
use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use std::sync::Arc;

pub type DynHealthRepository = Arc<dyn HealthRepositoryTrait + Send + Sync>;
pub type DynHealthService = Arc<dyn HealthServiceTrait + Send + Sync>;

#[automock]
#[async_trait]
pub trait HealthRepositoryTrait {
    async fn ping(&self) -> Result<(), RepositoryError>;
}

#[automock]
#[async_trait]
pub trait HealthServiceTrait {
    async fn check(&self) -> Result<(), ServiceError>;
}
