use std::time::Duration;

use log::{debug, trace};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{RpcError, RpcRequest, RpcResponse};
use crate::config::MAINNET_RPC_ENDPOINT;

/// JSON-RPC client bound to one endpoint.
///
/// Holds no mutable state after construction; clones share the underlying
/// HTTP client and calls may run from any number of threads at once.
#[derive(Clone, Debug)]
pub struct RpcClient {
    endpoint: String,
    http: Client,
    debug: bool,
}

#[derive(Debug, Default)]
pub struct RpcClientBuilder {
    endpoint: Option<String>,
    http: Option<Client>,
    debug: bool,
    timeout: Option<Duration>,
}

impl RpcClientBuilder {
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Custom transport. A supplied client keeps its own timeout settings.
    pub fn http_client(mut self, http: Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Per-request timeout for the default transport. Unset means none.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<RpcClient, RpcError> {
        let http = match self.http {
            Some(http) => http,
            None => Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(RpcError::Transport)?,
        };
        Ok(RpcClient {
            endpoint: self
                .endpoint
                .unwrap_or_else(|| MAINNET_RPC_ENDPOINT.to_string()),
            http,
            debug: self.debug,
        })
    }
}

impl RpcClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, RpcError> {
        Self::builder().endpoint(endpoint).build()
    }

    pub fn builder() -> RpcClientBuilder {
        RpcClientBuilder::default()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Posts one request and returns the raw response body.
    ///
    /// A status outside 2xx is an error that still carries the body.
    pub fn call(&self, method: &str, params: Vec<Value>) -> Result<Vec<u8>, RpcError> {
        let payload =
            serde_json::to_vec(&RpcRequest::new(method, &params)).map_err(RpcError::Payload)?;
        trace!("rpc {method} -> {}", self.endpoint);

        let response = match self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(payload.clone())
            .send()
        {
            Ok(response) => response,
            Err(err) => {
                self.dump(&payload, None, None);
                return Err(RpcError::Transport(err));
            }
        };

        let status = response.status();
        let body = match response.bytes() {
            Ok(bytes) => bytes.to_vec(),
            Err(err) => {
                self.dump(&payload, Some(status), None);
                return Err(RpcError::Body(err));
            }
        };

        if !status.is_success() {
            self.dump(&payload, Some(status), Some(&body));
            return Err(RpcError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }

    /// Calls `method` and unwraps the response envelope into `T`.
    pub fn call_for<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<T, RpcError> {
        let response: RpcResponse<T> = decode_response(self.call(method, params))?;
        if let Some(error) = response.error {
            return Err(RpcError::Rpc(error));
        }
        response.result.ok_or(RpcError::MissingResult)
    }

    fn dump(&self, request: &[u8], status: Option<StatusCode>, body: Option<&[u8]>) {
        if !self.debug {
            return;
        }
        debug!(
            "request POST {} {}",
            self.endpoint,
            String::from_utf8_lossy(request)
        );
        match status {
            Some(status) => debug!(
                "response {status} {}",
                String::from_utf8_lossy(body.unwrap_or_default())
            ),
            None => debug!("response <none>"),
        }
    }
}

/// Decodes a body returned by [`RpcClient::call`], passing call errors through.
pub fn decode_response<T: DeserializeOwned>(
    result: Result<Vec<u8>, RpcError>,
) -> Result<T, RpcError> {
    let body = result?;
    serde_json::from_slice(&body).map_err(|source| RpcError::Decode { source, body })
}
