use crate::domain::model::{CallResult, HttpCall, HttpMethod};
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// `Transport` backed by a shared reqwest client with a per-request timeout.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout: Duration,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().connect_timeout(timeout).build()?;
        Ok(Self { client, timeout })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, call: &HttpCall) -> CallResult {
        let mut request = match call.method {
            HttpMethod::Get => self.client.get(&call.url),
            HttpMethod::Post => self.client.post(&call.url),
        };

        for (key, value) in &call.headers {
            request = request.header(key, value);
        }

        if let Some(body) = &call.body {
            request = request.json(body);
        }

        request = request.timeout(self.timeout);

        tracing::debug!("📡 {} {}", call.method, call.url);

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("📡 {} {} failed: {}", call.method, call.url, e);
                return CallResult::from_error(format!("request failed: {}", e));
            }
        };

        let status = response.status();
        tracing::debug!("📡 {} {} -> {}", call.method, call.url, status);

        match response.text().await {
            Ok(text) => CallResult::from_response(status.as_u16(), status.is_success(), text),
            Err(e) => CallResult {
                status_ok: false,
                status: Some(status.as_u16()),
                raw_body: format!("failed to read response body: {}", e),
            },
        }
    }
}
