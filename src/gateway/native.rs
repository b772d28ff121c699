//! reqwest-backed transport for native builds

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::request::Method;
use super::transport::{HttpCall, RawResponse, Transport, TransportError};
use crate::config::ApiConfig;

/// HTTP transport over a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TransportError::Build(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn execute(&self, call: HttpCall) -> Result<RawResponse, TransportError> {
        let mut builder = match call.method {
            Method::Get => self.client.get(&call.url),
            Method::Post => self.client.post(&call.url),
        };

        for (name, value) in &call.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &call.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(classify)?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let body = response.bytes().await.map_err(classify)?;

        Ok(RawResponse {
            status: status.as_u16(),
            status_text,
            body: body.to_vec(),
        })
    }

    async fn pause(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_builder() {
        TransportError::Build(err.to_string())
    } else {
        TransportError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_from_config() {
        let transport = ReqwestTransport::new(&ApiConfig::default());
        assert!(transport.is_ok());
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let transport = ReqwestTransport::new(&ApiConfig::default()).unwrap();
        let call = HttpCall {
            method: Method::Get,
            url: "http://127.0.0.1:1/unreachable".to_string(),
            body: None,
            headers: Vec::new(),
        };

        let err = transport.execute(call).await.unwrap_err();
        assert!(matches!(err, TransportError::Network(_)));
    }
}
