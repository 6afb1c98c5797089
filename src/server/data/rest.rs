use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::HeaderValue, Method, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::server::{
    data::PersistenceGateway,
    error::gateway::GatewayError,
    model::record::{Filter, Record, Row},
};

/// Path of the PostgREST interface below the project URL.
const REST_PATH: &str = "rest/v1/";

/// Error document returned by PostgREST.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    code: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

/// Gateway speaking the managed store's REST interface.
///
/// Every request authenticates with the project key, sent both as the `apikey` header and
/// as a bearer token. Using the service role key bypasses row level security; with the
/// anonymous key, writes are subject to the table policies and refused writes surface as
/// access-denied failures.
#[derive(Clone)]
pub struct RestGateway {
    rest_url: Url,
    api_key: String,
    http: reqwest::Client,
}

impl RestGateway {
    /// Creates a gateway with its own HTTP client.
    ///
    /// # Arguments
    /// - `project_url` - Base URL of the store project, e.g. `https://xyz.supabase.co`
    /// - `api_key` - Service role or anonymous key
    /// - `timeout` - Per-request timeout
    ///
    /// # Returns
    /// - `Ok(RestGateway)` - Gateway ready to use; no request is made yet
    /// - `Err(GatewayError::InvalidUrl)` - `project_url` is not a valid base URL
    pub fn new(
        project_url: &str,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(GatewayError::Unreachable)?;

        Self::with_client(project_url, api_key, http)
    }

    /// Creates a gateway sharing an existing HTTP client.
    pub fn with_client(
        project_url: &str,
        api_key: impl Into<String>,
        http: reqwest::Client,
    ) -> Result<Self, GatewayError> {
        let mut base = Url::parse(project_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            rest_url: base.join(REST_PATH)?,
            api_key: api_key.into(),
            http,
        })
    }

    fn table_url(&self, table: &str) -> Result<Url, GatewayError> {
        Ok(self.rest_url.join(table)?)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }
}

#[async_trait]
impl PersistenceGateway for RestGateway {
    async fn insert(&self, table: &str, record: &Record) -> Result<Vec<Row>, GatewayError> {
        let response = self
            .request(Method::POST, self.table_url(table)?)
            .header("Prefer", HeaderValue::from_static("return=representation"))
            .json(record)
            .send()
            .await?;

        read_rows(response).await
    }

    async fn select(
        &self,
        table: &str,
        column: &str,
        limit: u64,
    ) -> Result<Vec<Row>, GatewayError> {
        let response = self
            .request(Method::GET, self.table_url(table)?)
            .query(&[("select", column.to_string()), ("limit", limit.to_string())])
            .send()
            .await?;

        read_rows(response).await
    }

    async fn delete(&self, table: &str, filter: &Filter) -> Result<(), GatewayError> {
        let response = self
            .request(Method::DELETE, self.table_url(table)?)
            .query(&[(
                filter.column.as_str(),
                format!("eq.{}", filter_operand(&filter.value)),
            )])
            .header("Prefer", HeaderValue::from_static("return=minimal"))
            .send()
            .await?;

        ensure_success(response).await.map(|_| ())
    }
}

/// Renders a filter value the way PostgREST expects it in a query string.
fn filter_operand(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

async fn read_rows(response: Response) -> Result<Vec<Row>, GatewayError> {
    let response = ensure_success(response).await?;
    let body = response.bytes().await?;

    // `return=minimal` and some proxies answer with an empty body
    if body.is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_slice(&body).map_err(|e| GatewayError::Decode(e.to_string()))
}

/// Turns non-2xx responses into `GatewayError::Rejected`.
async fn ensure_success(response: Response) -> Result<Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await?;

    let rejection = match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => GatewayError::Rejected {
            status: status.as_u16(),
            message: body.message.unwrap_or_else(|| status.to_string()),
            code: body.code,
            details: body.details,
            hint: body.hint,
        },
        Err(_) => GatewayError::Rejected {
            status: status.as_u16(),
            message: if text.is_empty() {
                status.to_string()
            } else {
                text
            },
            code: None,
            details: None,
            hint: None,
        },
    };

    Err(rejection)
}
