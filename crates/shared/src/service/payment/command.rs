use crate::{
    abstract_trait::payment::{
        repository::command::DynPaymentCommandRepository,
        service::command::PaymentCommandServiceTrait,
    },
    domain::{
        requests::{CreatePaymentRequest, UpdatePaymentRequest},
        responses::PaymentResponse,
    },
    errors::{RepositoryError, ServiceError, format_validation_errors},
    model::payment::DeleteOutcome,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info, warn};
use validator::Validate;

pub struct PaymentCommandService {
    command: DynPaymentCommandRepository,
}

impl PaymentCommandService {
    pub fn new(command: DynPaymentCommandRepository) -> Self {
        Self { command }
    }
}

fn validation_error(errors: &validator::ValidationErrors) -> ServiceError {
    let error_msg = format_validation_errors(errors);
    error!("Validation failed: {error_msg}");
    ServiceError::InvalidParameter(error_msg)
}

fn write_error(err: RepositoryError) -> ServiceError {
    match err {
        RepositoryError::ForeignKey(constraint) => {
            warn!("❌ Unknown reference rejected by {constraint}");
            ServiceError::InvalidParameter(format!("unknown reference: {constraint}"))
        }
        RepositoryError::NotFound => ServiceError::NotFound,
        RepositoryError::Conflict(_) => ServiceError::Conflict,
        _ => ServiceError::Internal,
    }
}

#[async_trait]
impl PaymentCommandServiceTrait for PaymentCommandService {
    async fn create(
        &self,
        request: &CreatePaymentRequest,
        user_id: i32,
    ) -> Result<PaymentResponse, ServiceError> {
        if let Err(validation_errors) = request.validate() {
            return Err(validation_error(&validation_errors));
        }

        let draft = request
            .to_draft(user_id)
            .ok_or_else(|| ServiceError::InvalidParameter("incomplete payment".into()))?;

        info!("💸 Creating payment for user={user_id}");

        let payment = self.command.create(&draft).await.map_err(|e| {
            error!("❌ Failed to create payment for user {user_id}: {e}");
            write_error(e)
        })?;

        Ok(PaymentResponse::from(payment))
    }

    async fn update(
        &self,
        request: &UpdatePaymentRequest,
        user_id: i32,
        payment_id: i32,
    ) -> Result<PaymentResponse, ServiceError> {
        if let Err(validation_errors) = request.validate() {
            return Err(validation_error(&validation_errors));
        }

        let draft = request
            .to_draft(user_id, payment_id)
            .ok_or_else(|| ServiceError::InvalidParameter("incomplete payment".into()))?;

        info!("✏️ Updating payment id={payment_id} for user={user_id}");

        let payment = self.command.update(&draft).await.map_err(|e| {
            error!("❌ Failed to update payment {payment_id} for user {user_id}: {e}");
            write_error(e)
        })?;

        Ok(PaymentResponse::from(payment))
    }

    async fn delete_by_id(&self, user_id: i32, payment_id: i32) -> Result<(), ServiceError> {
        info!("🗑️ Deleting payment id={payment_id} for user={user_id}");

        let outcome = self
            .command
            .delete_by_id(user_id, payment_id)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete payment {payment_id}: {e}");
                ServiceError::Internal
            })?;

        match outcome {
            DeleteOutcome::Deleted => Ok(()),
            DeleteOutcome::NotFound => Err(ServiceError::NotFound),
            DeleteOutcome::NotOwner => Err(ServiceError::Forbidden),
        }
    }
}
