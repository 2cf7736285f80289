use crate::di::DependenciesInject;
use shared::config::ConnectionPool;

#[derive(Debug, Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub version: String,
}

impl AppState {
    pub fn new(pool: ConnectionPool, version: impl Into<String>) -> Self {
        Self {
            di_container: DependenciesInject::new(pool),
            version: version.into(),
        }
    }
}
