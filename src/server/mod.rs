//! Server-side API backend.
//!
//! This module contains the complete backend: form submission endpoints, diagnostic
//! endpoints, static file serving, and the persistence gateways behind them. The backend
//! uses Axum as the web framework and writes either to a managed store's REST interface
//! through reqwest or straight to a SQL database through SeaORM.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, body extraction, and DTO conversion
//! - **Service Layer** (`service/`) - Submission pipeline, error classification, and probes
//! - **Data Layer** (`data/`) - `PersistenceGateway` trait and its REST and SQL implementations
//! - **Model Layer** (`model/`) - Form descriptors, decoded payloads, and records
//! - **Error Layer** (`error/`) - Error types and HTTP response mapping
//! - **Util** (`util/`) - Text sanitization helpers
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Shared gateway handle and static root
//! - **Startup** (`startup`) - Gateway construction, middleware layers, and the listener
//! - **Router** (`router`) - Route table and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** matches the path, or falls through to static files
//! 2. **Controller** decodes the url-encoded or JSON body into a `FormPayload`
//! 3. **Service** validates, sanitizes, and inserts through the gateway
//! 4. **Service** classifies any persistence error into status and message
//! 5. **Controller** returns the JSON response body

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
