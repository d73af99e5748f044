//! # user-db
//!
//! Record store for the user lifecycle, implementing `UserRepository` with
//! PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and embedded migrations
//! - Database model with SQLx `FromRow` derive
//! - Entity ↔ Model mappers
//! - Postgres and in-memory repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use user_db::{create_pool, run_migrations, PgUserRepository, PoolConfig};
//!
//! async fn example(config: PoolConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, PgPool, PoolConfig};
pub use repositories::{InMemoryUserRepository, PgUserRepository};
