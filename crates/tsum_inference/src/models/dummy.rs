use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use tsum_core::{GenerativeModel, Result, SummaryOptions};

/// Deterministic offline stand-in: returns the first 20 words of the input.
/// Counts invocations so tests can observe how often the backend runs.
#[derive(Default)]
pub struct DummyModel {
    calls: AtomicUsize,
}

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel")
            .field("calls", &self.calls.load(Ordering::SeqCst))
            .finish()
    }
}

impl DummyModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl GenerativeModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn generate_summary(&self, text: &str, _options: &SummaryOptions) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let words: Vec<&str> = text.split_whitespace().take(20).collect();
        Ok(words.join(" "))
    }
}
