use thiserror::Error;

/// Failures reported by a persistence gateway.
///
/// The rendered message of each variant is what the error classifier inspects and what
/// callers receive as `technical_error`, so variants carrying store output render it
/// verbatim.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The store could not be reached at all (connection refused, DNS, timeout).
    ///
    /// Health checks report the database as disconnected for this variant only.
    #[error("Persistence gateway unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// The store answered the request with an error body.
    ///
    /// Carries the fields of a PostgREST error document. `message` holds the database's own
    /// message, e.g. `duplicate key value violates unique constraint "..."`.
    #[error("{}", describe_rejection(.message, .code.as_deref(), .details.as_deref(), .hint.as_deref()))]
    Rejected {
        /// HTTP status of the store's response.
        status: u16,
        message: String,
        code: Option<String>,
        details: Option<String>,
        hint: Option<String>,
    },

    /// Error from a direct database connection.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// The store's response could not be decoded.
    #[error("Failed to decode persistence gateway response: {0}")]
    Decode(String),

    /// The configured store URL cannot address a table.
    #[error("Invalid persistence gateway URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl GatewayError {
    /// Whether the store itself is out of reach, as opposed to refusing a request.
    pub fn is_unreachable(&self) -> bool {
        match self {
            Self::Unreachable(_) => true,
            Self::Database(err) => matches!(
                err,
                sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_)
            ),
            _ => false,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else {
            GatewayError::Unreachable(err)
        }
    }
}

fn describe_rejection(
    message: &str,
    code: Option<&str>,
    details: Option<&str>,
    hint: Option<&str>,
) -> String {
    let mut text = message.to_string();
    if let Some(code) = code {
        text.push_str(&format!(" (code: {})", code));
    }
    if let Some(details) = details {
        text.push_str(&format!(" details: {}", details));
    }
    if let Some(hint) = hint {
        text.push_str(&format!(" hint: {}", hint));
    }
    text
}
