use serde::{Deserialize, Serialize};

pub const INFERENCE_UP_PATH: &str = "/api/v1/inference/up";
pub const DEFAULT_DTYPE: &str = "float16";

/// Body of `POST /api/v1/inference/up`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceRequest {
    pub model: String,
    pub dtype: String,
    pub additional_args: Vec<String>,
}

impl InferenceRequest {
    pub fn new(model: impl Into<String>, additional_args: Vec<String>) -> Self {
        Self {
            model: model.into(),
            dtype: DEFAULT_DTYPE.to_string(),
            additional_args,
        }
    }
}

/// Per-model launch options. `args` is forwarded to the backend untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub args: Vec<String>,
}

impl ModelConfig {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

pub fn inference_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), INFERENCE_UP_PATH)
}
