mod command;
mod query;

pub use self::command::PaymentCommandService;
pub use self::query::PaymentQueryService;
