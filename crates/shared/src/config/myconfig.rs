use anyhow::{Context, Result, anyhow};
use std::time::Duration;

const DEFAULT_PORT: u16 = 9292;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_CONN_MAX_LIFETIME_SECS: u64 = 10;
const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
    pub port: u16,
    pub max_connections: u32,
    pub conn_max_lifetime: Duration,
    pub allowed_origins: Vec<String>,
    pub shutdown_grace: Duration,
    pub is_dev: bool,
    pub version: String,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("Missing env: DATABASE_URL")?;

        let run_migrations = match lookup("RUN_MIGRATIONS").as_deref() {
            None | Some("false") => false,
            Some("true") => true,
            Some(other) => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{other}'",
                ));
            }
        };

        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let max_connections = parse_or(&lookup, "MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(anyhow!("MAX_CONNECTIONS must be greater than zero"));
        }

        let conn_max_lifetime = Duration::from_secs(parse_or(
            &lookup,
            "DB_CONN_MAX_LIFETIME_SECS",
            DEFAULT_CONN_MAX_LIFETIME_SECS,
        )?);
        let shutdown_grace = Duration::from_secs(parse_or(
            &lookup,
            "SHUTDOWN_GRACE_SECS",
            DEFAULT_SHUTDOWN_GRACE_SECS,
        )?);

        let allowed_origins = parse_origins(lookup("ALLOWED_ORIGINS").as_deref());

        let is_dev = lookup("APP_ENV").as_deref() != Some("production");

        let version = lookup("APP_VERSION")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

        Ok(Self {
            database_url,
            run_migrations,
            port,
            max_connections,
            conn_max_lifetime,
            allowed_origins,
            shutdown_grace,
            is_dev,
            version,
        })
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        _ => Ok(default),
    }
}

fn parse_origins(raw: Option<&str>) -> Vec<String> {
    let origins: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        vec!["*".to_string()]
    } else {
        origins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn applies_defaults() {
        let config =
            Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/warikan")]))
                .unwrap();

        assert_eq!(config.port, 9292);
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.conn_max_lifetime, Duration::from_secs(10));
        assert_eq!(config.shutdown_grace, Duration::from_secs(10));
        assert_eq!(config.allowed_origins, vec!["*".to_string()]);
        assert!(config.allows_any_origin());
        assert!(!config.run_migrations);
        assert!(config.is_dev);
        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn reads_explicit_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/warikan"),
            ("PORT", "8080"),
            ("MAX_CONNECTIONS", "12"),
            ("RUN_MIGRATIONS", "true"),
            ("ALLOWED_ORIGINS", "https://a.example, https://b.example"),
            ("APP_ENV", "production"),
            ("APP_VERSION", "1.2.3"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.max_connections, 12);
        assert!(config.run_migrations);
        assert_eq!(
            config.allowed_origins,
            vec![
                "https://a.example".to_string(),
                "https://b.example".to_string()
            ]
        );
        assert!(!config.allows_any_origin());
        assert!(!config.is_dev);
        assert_eq!(config.version, "1.2.3");
    }

    #[test]
    fn missing_database_url_is_an_error() {
        assert!(Config::from_lookup(lookup_from(&[])).is_err());
    }

    #[test]
    fn rejects_malformed_values() {
        let bad_port = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/warikan"),
            ("PORT", "not-a-port"),
        ]));
        assert!(bad_port.is_err());

        let bad_flag = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/warikan"),
            ("RUN_MIGRATIONS", "yes"),
        ]));
        assert!(bad_flag.is_err());

        let zero_pool = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/warikan"),
            ("MAX_CONNECTIONS", "0"),
        ]));
        assert!(zero_pool.is_err());
    }
}
