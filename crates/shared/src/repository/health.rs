use crate::{
    abstract_trait::health::HealthRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

pub struct HealthRepository {
    db: ConnectionPool,
}

impl HealthRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HealthRepositoryTrait for HealthRepository {
    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1")
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Database ping failed: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(())
    }
}
