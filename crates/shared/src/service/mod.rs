mod health;
mod payment;

pub use self::health::HealthService;
pub use self::payment::{PaymentCommandService, PaymentQueryService};
