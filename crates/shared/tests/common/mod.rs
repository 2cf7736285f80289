//! Database fixtures for repository tests.
//!
//! Tests run only when `TEST_DATABASE_URL` points at a disposable Postgres
//! database; otherwise they print a notice and return early.

#![allow(dead_code)]

use shared::{MIGRATOR, config::ConnectionPool};
use sqlx::postgres::PgPoolOptions;

pub struct TestContext {
    pub pool: ConnectionPool,
}

impl TestContext {
    pub async fn new() -> Option<Self> {
        let database_url = std::env::var("TEST_DATABASE_URL").ok()?;

        let pool = PgPoolOptions::new()
            .max_connections(4)
            .connect(&database_url)
            .await
            .ok()?;

        MIGRATOR.run(&pool).await.ok()?;

        Some(Self { pool })
    }

    pub async fn user(&self, name: &str) -> i32 {
        sqlx::query_scalar::<_, i32>("INSERT INTO users (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }

    pub async fn category(&self, name: &str) -> i32 {
        sqlx::query_scalar::<_, i32>("INSERT INTO categories (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }

    pub async fn payer(&self, name: &str) -> i32 {
        sqlx::query_scalar::<_, i32>("INSERT INTO payers (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }

    pub async fn count_payments(&self, payment_id: i32) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM payments WHERE id = $1")
            .bind(payment_id)
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}
