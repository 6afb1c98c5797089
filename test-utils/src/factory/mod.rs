//! Factory methods for creating test data.
//!
//! Factories insert signup rows with sensible defaults so tests can start from a table that
//! already holds registrations, for example to provoke a unique-constraint conflict.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let signup = factory::create_fiber_signup(&db).await?;
//!
//! let taken = factory::workshop::FiberSignupFactory::new(&db)
//!     .telefone("11988887777")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `inscription` - Create general event registrations
//! - `workshop` - Create fiber optics workshop signups
//! - `helpers` - Unique value generation shared by factories

pub mod helpers;
pub mod inscription;
pub mod workshop;

pub use inscription::create_inscription;
pub use workshop::create_fiber_signup;
