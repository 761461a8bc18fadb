pub mod chunking;
pub mod error;
pub mod models;
pub mod types;

pub use error::Error;
pub use models::GenerativeModel;
pub use types::{Document, Mode, SummaryOptions};

pub type Result<T> = std::result::Result<T, Error>;
