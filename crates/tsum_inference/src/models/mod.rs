use std::sync::Arc;

use tsum_core::{GenerativeModel, Result};

use crate::Config;

pub mod dummy;
pub mod ollama;

pub use dummy::DummyModel;
pub use ollama::OllamaModel;

pub const DEFAULT_MODEL: &str = "gemma3:12b";

/// Build a generative backend from the configuration. `"dummy"` selects the
/// deterministic offline model; any other name is passed through to the
/// inference server opaquely.
pub async fn create_model(config: &Config) -> Result<Arc<dyn GenerativeModel>> {
    let name = config.model_name.as_deref().unwrap_or(DEFAULT_MODEL);
    match name {
        "dummy" => Ok(Arc::new(DummyModel::new())),
        _ => Ok(Arc::new(OllamaModel::new(name, config.model_url.as_deref())?)),
    }
}
