// GraphQL HTTP client.
// Posts operations to the backend and decodes the `{data, errors}` envelope.

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::{Serialize, de::DeserializeOwned};

use crate::config::Config;
use crate::error::{AdminError, Result};

use super::types::{GraphQlRequest, GraphQlResponse};

/// Client for the listings GraphQL endpoint.
pub struct GraphQlClient {
    client: Client,
    endpoint: String,
}

impl GraphQlClient {
    /// Create a client for the endpoint and timeout named in `config`.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("listings-admin"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()
            .map_err(AdminError::Api)?;

        Ok(Self {
            client,
            endpoint: config.api_url.clone(),
        })
    }

    /// The endpoint operations are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute one operation and decode its `data` payload.
    pub async fn execute<V, T>(&self, operation_name: &str, query: &str, variables: V) -> Result<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let body = GraphQlRequest {
            query,
            operation_name,
            variables,
        };

        tracing::debug!(operation = operation_name, endpoint = %self.endpoint, "posting GraphQL operation");
        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(AdminError::Api)?;

        let response = check_response(response).await?;
        let bytes = response.bytes().await.map_err(AdminError::Api)?;
        decode_response(&bytes)
    }
}

/// Check response status and convert errors.
async fn check_response(response: Response) -> Result<Response> {
    match response.status() {
        StatusCode::OK => Ok(response),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AdminError::Unauthorized),
        StatusCode::NOT_FOUND => {
            let url = response.url().to_string();
            Err(AdminError::NotFound(url))
        }
        // GraphQL servers commonly answer validation failures with 400 and an
        // errors envelope in the body.
        StatusCode::BAD_REQUEST => {
            let text = response.text().await.unwrap_or_default();
            match serde_json::from_str::<GraphQlResponse<serde_json::Value>>(&text) {
                Ok(envelope) if envelope.errors.as_ref().is_some_and(|e| !e.is_empty()) => {
                    Err(graphql_errors(envelope.errors.unwrap_or_default()))
                }
                _ => Err(AdminError::Other(format!("HTTP 400 Bad Request: {}", text))),
            }
        }
        status => Err(AdminError::Other(format!(
            "HTTP {}: {}",
            status,
            response.text().await.unwrap_or_default()
        ))),
    }
}

/// Decode a GraphQL response body into its `data` payload.
pub fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let envelope: GraphQlResponse<T> = serde_json::from_slice(bytes)?;

    match envelope.errors {
        Some(errors) if !errors.is_empty() => Err(graphql_errors(errors)),
        _ => envelope.data.ok_or(AdminError::MissingData),
    }
}

fn graphql_errors(errors: Vec<super::types::GraphQlErrorMessage>) -> AdminError {
    AdminError::GraphQl(errors.into_iter().map(|e| e.message).collect())
}
