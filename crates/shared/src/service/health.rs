use crate::{
    abstract_trait::health::{DynHealthRepository, HealthServiceTrait},
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

pub struct HealthService {
    repository: DynHealthRepository,
}

impl HealthService {
    pub fn new(repository: DynHealthRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl HealthServiceTrait for HealthService {
    async fn check(&self) -> Result<(), ServiceError> {
        self.repository.ping().await.map_err(|e| {
            error!("🚑 Health check failed: {e}");
            ServiceError::ServiceUnavailable
        })
    }
}
