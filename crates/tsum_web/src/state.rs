use tsum_inference::models::DEFAULT_MODEL;

pub struct AppState {
    /// Model preselected in the form
    pub default_model: String,
    /// Models offered by the selector
    pub model_choices: Vec<String>,
    /// Inference server URL, if not the local default
    pub model_url: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            default_model: DEFAULT_MODEL.to_string(),
            model_choices: vec![
                DEFAULT_MODEL.to_string(),
                "llama3.2".to_string(),
                "dummy".to_string(),
            ],
            model_url: None,
        }
    }
}
