//! Eventdesk Test Utils
//!
//! Provides shared testing utilities for the eventdesk backend. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases holding the signup tables,
//! factories for seeding existing signups, and fixtures with the payloads the front-end posts.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Inserts signup rows with sensible defaults
//! - **fixture**: Form payloads without touching the database
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn stores_signup() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_signup_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
