use async_trait::async_trait;
use std::fmt;

use crate::types::SummaryOptions;
use crate::Result;

#[async_trait]
pub trait GenerativeModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Produce a summary of `text` within the given length bounds.
    async fn generate_summary(&self, text: &str, options: &SummaryOptions) -> Result<String>;
}
