mod payment;

pub use self::payment::{CreatePaymentRequest, FindPaymentsQuery, UpdatePaymentRequest};
