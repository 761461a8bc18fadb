use std::fmt;
use std::sync::Arc;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tsum_core::{Error, GenerativeModel, Result, SummaryOptions};
use url::Url;

const DEFAULT_BASE_URL: &str = "http://localhost:11434";

#[derive(Serialize)]
struct GenerateOptions {
    num_predict: i64,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Generative backend talking to an Ollama server. The model name is passed
/// through opaquely; download or connection failures propagate as errors.
pub struct OllamaModel {
    client: Arc<Client>,
    base_url: String,
    model: String,
}

impl fmt::Debug for OllamaModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OllamaModel")
            .field("client", &"<reqwest::Client>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl OllamaModel {
    pub fn new(model: &str, base_url: Option<&str>) -> Result<Self> {
        let base_url = match base_url {
            Some(raw) => {
                let parsed = Url::parse(raw)
                    .map_err(|e| Error::InvalidInput(format!("invalid model URL {}: {}", raw, e)))?;
                parsed.as_str().trim_end_matches('/').to_string()
            }
            None => DEFAULT_BASE_URL.to_string(),
        };
        Ok(Self {
            client: Arc::new(Client::new()),
            base_url,
            model: model.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl GenerativeModel for OllamaModel {
    fn name(&self) -> &str {
        "Ollama"
    }

    async fn generate_summary(&self, text: &str, options: &SummaryOptions) -> Result<String> {
        let prompt = format!(
            "Summarize the following text in roughly {} to {} words. \
             Reply with the summary only.\n\n{}",
            options.min_length, options.max_length, text
        );

        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                num_predict: options.max_length as i64,
            },
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&request)
            .send()
            .await?
            .json::<GenerateResponse>()
            .await?;

        Ok(response.response.trim().to_string())
    }
}
