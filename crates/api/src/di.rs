use shared::{
    abstract_trait::{
        health::{DynHealthRepository, DynHealthService},
        payment::{
            repository::{command::DynPaymentCommandRepository, query::DynPaymentQueryRepository},
            service::{command::DynPaymentCommandService, query::DynPaymentQueryService},
        },
    },
    config::ConnectionPool,
    repository::{
        health::HealthRepository,
        payment::{command::PaymentCommandRepository, query::PaymentQueryRepository},
    },
    service::{HealthService, PaymentCommandService, PaymentQueryService},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub payment_command: DynPaymentCommandService,
    pub payment_query: DynPaymentQueryService,
    pub health: DynHealthService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("payment_command", &"PaymentCommandService")
            .field("payment_query", &"PaymentQueryService")
            .field("health", &"HealthService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let command_repository =
            Arc::new(PaymentCommandRepository::new(pool.clone())) as DynPaymentCommandRepository;
        let query_repository =
            Arc::new(PaymentQueryRepository::new(pool.clone())) as DynPaymentQueryRepository;
        let health_repository = Arc::new(HealthRepository::new(pool)) as DynHealthRepository;

        let payment_command =
            Arc::new(PaymentCommandService::new(command_repository)) as DynPaymentCommandService;
        let payment_query =
            Arc::new(PaymentQueryService::new(query_repository)) as DynPaymentQueryService;
        let health = Arc::new(HealthService::new(health_repository)) as DynHealthService;

        Self {
            payment_command,
            payment_query,
            health,
        }
    }
}
