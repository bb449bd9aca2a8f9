//! REST HTTP client implementation.

use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use clientele_core::{Error, Operation, Result, ServiceError, TransportError};

use crate::config::HttpConfig;

use super::endpoints::ErrorBody;

/// HTTP client for JSON REST requests.
///
/// Every request names the [`Operation`] it performs so that error responses
/// without a message get that operation's default.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
}

impl RestClient {
    /// Create a new client.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(transport_error)?;

        Ok(Self { client })
    }

    /// Make a GET request with query parameters.
    #[instrument(skip(self, operation), fields(%operation))]
    pub async fn query<Q, R>(&self, operation: Operation, url: &str, params: &Q) -> Result<R>
    where
        Q: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        debug!(url, "GET");
        trace!(?params, "query parameters");

        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(operation, response).await
    }

    /// Make a GET request without parameters.
    #[instrument(skip(self, operation), fields(%operation))]
    pub async fn fetch<R>(&self, operation: Operation, url: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(operation, response).await
    }

    /// Send a JSON body and decode the JSON response.
    #[instrument(skip(self, operation, body), fields(%operation))]
    pub async fn send_json<B, R>(
        &self,
        operation: Operation,
        method: Method,
        url: &str,
        body: &B,
    ) -> Result<R>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        debug!(%method, url, "JSON request");
        trace!(?body, "request body");

        let response = self
            .client
            .request(method, url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(operation, response).await
    }

    /// Send a request with no body and decode the JSON response.
    #[instrument(skip(self, operation), fields(%operation))]
    pub async fn send_empty<R>(&self, operation: Operation, method: Method, url: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        debug!(%method, url, "request (no body)");

        let response = self
            .client
            .request(method, url)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(operation, response).await
    }

    /// Send a request with no body whose response content is ignored.
    #[instrument(skip(self, operation), fields(%operation))]
    pub async fn send_no_content(&self, operation: Operation, method: Method, url: &str) -> Result<()> {
        debug!(%method, url, "request (no response)");

        let response = self
            .client
            .request(method, url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        trace!(status = %status, "response");
        if status.is_success() {
            Ok(())
        } else {
            Err(parse_error_response(operation, response).await.into())
        }
    }

    /// Handle a response, decoding the body or the error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        operation: Operation,
        response: reqwest::Response,
    ) -> Result<R> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            response.json::<R>().await.map_err(transport_error)
        } else {
            Err(parse_error_response(operation, response).await.into())
        }
    }
}

/// Build a [`ServiceError`] from an error response.
///
/// The body's `error` field becomes the message when present; anything
/// else, including an unreadable body, falls back to the operation default.
async fn parse_error_response(operation: Operation, response: reqwest::Response) -> ServiceError {
    let status = response.status().as_u16();

    let body = match response.text().await {
        Ok(text) => serde_json::from_str::<ErrorBody>(&text).unwrap_or_default(),
        Err(_) => ErrorBody::default(),
    };

    debug!(status, error = ?body.error, "error response");
    ServiceError::new(operation, status, body.error)
}

/// Classify a reqwest failure.
pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    let message = err.to_string();
    let err = if err.is_timeout() {
        TransportError::Timeout { message }
    } else if err.is_connect() {
        TransportError::Connection { message }
    } else if err.is_decode() {
        TransportError::Decode { message }
    } else {
        TransportError::Http { message }
    };
    Error::Transport(err)
}
