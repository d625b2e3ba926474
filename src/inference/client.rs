use super::types::*;
use crate::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait InferenceApi: Send + Sync {
    async fn inference_up(&self, model: &str, config: &ModelConfig) -> Result<Value>;
}

/// Client for the inference-management API of a compute node.
pub struct ComputeClient {
    base_url: String,
    client: reqwest::Client,
}

impl ComputeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Without a timeout an unresponsive endpoint blocks the call indefinitely.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.into(),
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl InferenceApi for ComputeClient {
    async fn inference_up(&self, model: &str, config: &ModelConfig) -> Result<Value> {
        let url = inference_url(&self.base_url);
        let payload = InferenceRequest::new(model, config.args.clone());

        debug!("POST {} for model {}", url, payload.model);

        let response = self.client.post(&url).json(&payload).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::RemoteCall {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Received {} from {} ({} bytes)", status, url, body.len());

        Ok(serde_json::from_str(&body)?)
    }
}

/// One-shot call with a fresh client and no timeout.
pub async fn inference_up(base_url: &str, model: &str, config: &ModelConfig) -> Result<Value> {
    ComputeClient::new(base_url).inference_up(model, config).await
}
