use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub content: String,
}

impl Document {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Length bounds forwarded to the generative backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SummaryOptions {
    pub max_length: usize,
    pub min_length: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            max_length: 130,
            min_length: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Abstractive,
    Extractive,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Abstractive => write!(f, "abstractive"),
            Mode::Extractive => write!(f, "extractive"),
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "abstractive" => Ok(Mode::Abstractive),
            "extractive" => Ok(Mode::Extractive),
            other => Err(crate::Error::InvalidInput(format!(
                "unknown mode: {}",
                other
            ))),
        }
    }
}
