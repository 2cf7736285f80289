mod health;
mod payment;

pub use self::health::{HealthResponse, HealthStatus};
pub use self::payment::{
    PaymentDatesResponse, PaymentListResponse, PaymentResponse, PaymentsResponse,
};
