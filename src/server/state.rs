//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through axum's
//! state extraction. Every field is cheap to clone: the gateway sits behind an `Arc` and
//! the rest is plain data.

use std::{path::PathBuf, sync::Arc};

use crate::server::{config::CredentialPresence, data::PersistenceGateway};

#[derive(Clone)]
pub struct AppState {
    /// Persistence gateway used by every submission and diagnostic endpoint.
    pub gateway: Arc<dyn PersistenceGateway>,

    /// Directory the site's static files are served from.
    pub static_root: PathBuf,

    /// Credentials found at startup, echoed by the deployment check.
    pub credentials: CredentialPresence,
}

impl AppState {
    pub fn new(
        gateway: Arc<dyn PersistenceGateway>,
        static_root: PathBuf,
        credentials: CredentialPresence,
    ) -> Self {
        Self {
            gateway,
            static_root,
            credentials,
        }
    }
}
