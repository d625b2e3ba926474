mod client;
mod types;

pub use client::{ComputeClient, InferenceApi, inference_up};
pub use types::*;

use crate::{Result, config::InferenceSettings};
use serde_json::Value;
use tracing::{error, info};

/// Asks the remote API to bring up the configured model.
pub async fn launch(api: &dyn InferenceApi, settings: &InferenceSettings) -> Result<Value> {
    settings.validate()?;

    let model_config = ModelConfig::new(settings.args.iter().cloned());
    info!(
        "Requesting inference up for model {} with {} additional args",
        settings.model,
        model_config.args.len()
    );

    match api.inference_up(&settings.model, &model_config).await {
        Ok(response) => {
            info!("Inference up accepted for model {}", settings.model);
            Ok(response)
        }
        Err(e) => {
            error!("Inference up failed for model {}: {}", settings.model, e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use async_trait::async_trait;
    use mockall::{mock, predicate::eq};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    mock! {
        Api {}

        #[async_trait]
        impl InferenceApi for Api {
            async fn inference_up(&self, model: &str, config: &ModelConfig) -> Result<Value>;
        }
    }

    fn settings() -> InferenceSettings {
        InferenceSettings {
            base_url: "http://localhost:8080/".to_string(),
            model: "m".to_string(),
            args: vec!["--x".to_string()],
            timeout_secs: None,
        }
    }

    #[test]
    fn request_uses_float16() {
        let request = InferenceRequest::new("m", vec!["--x".to_string()]);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"model": "m", "dtype": "float16", "additional_args": ["--x"]})
        );
    }

    #[test]
    fn url_joins_without_double_slash() {
        assert_eq!(
            inference_url("http://localhost:8080/"),
            "http://localhost:8080/api/v1/inference/up"
        );
        assert_eq!(
            inference_url("http://localhost:8080"),
            "http://localhost:8080/api/v1/inference/up"
        );
    }

    #[test]
    fn model_config_requires_args() {
        let config: ModelConfig =
            serde_json::from_value(json!({"args": ["--tensor-parallel-size", "4"]})).unwrap();
        assert_eq!(config, ModelConfig::new(["--tensor-parallel-size", "4"]));

        assert!(serde_json::from_value::<ModelConfig>(json!({})).is_err());
    }

    #[tokio::test]
    async fn launch_forwards_model_and_args() {
        let mut api = MockApi::new();
        api.expect_inference_up()
            .with(eq("m"), eq(ModelConfig::new(["--x"])))
            .times(1)
            .returning(|_, _| Ok(json!({"ok": true})));

        let response = launch(&api, &settings()).await.unwrap();
        assert_eq!(response, json!({"ok": true}));
    }

    #[tokio::test]
    async fn launch_surfaces_remote_failure() {
        let mut api = MockApi::new();
        api.expect_inference_up().times(1).returning(|_, _| {
            Err(Error::RemoteCall {
                status: 500,
                body: "boom".to_string(),
            })
        });

        let err = launch(&api, &settings()).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn launch_rejects_empty_base_url_without_calling() {
        let mut api = MockApi::new();
        api.expect_inference_up().never();

        let mut settings = settings();
        settings.base_url = String::new();

        let err = launch(&api, &settings).await.unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
