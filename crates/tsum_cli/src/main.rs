use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tsum_core::{Mode, Result};
use tsum_inference::{AbstractiveSummarizer, Config, ExtractiveSummarizer};

#[derive(Parser, Debug)]
#[command(author, version, about = "Text summarizer CLI", long_about = None)]
struct Cli {
    /// Text file to summarize (can pass multiple)
    #[arg(long, short)]
    file: Vec<PathBuf>,
    /// Raw text to summarize
    #[arg(long, short)]
    text: Option<String>,
    /// Summarization mode
    #[arg(long, value_enum, default_value_t = Mode::Abstractive)]
    mode: Mode,
    /// Model name for the abstractive summarizer
    #[arg(long, default_value = tsum_inference::models::DEFAULT_MODEL)]
    model: String,
    /// Inference server URL
    #[arg(long)]
    model_url: Option<String>,
    /// Number of sentences for the extractive summarizer
    #[arg(long, default_value_t = 3)]
    sentences: usize,
}

/// Files win over raw text: when any `--file` is given, `--text` is ignored.
fn gather_texts(files: &[PathBuf], text: Option<&str>) -> Result<Vec<String>> {
    if !files.is_empty() {
        return files
            .iter()
            .map(|path| std::fs::read_to_string(path).map_err(Into::into))
            .collect();
    }
    Ok(text.map(|t| vec![t.to_string()]).unwrap_or_default())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let texts = gather_texts(&cli.file, cli.text.as_deref())?;
    if texts.is_empty() {
        println!("No input provided. Use --file or --text");
        std::process::exit(1);
    }

    match cli.mode {
        Mode::Abstractive => {
            let config = Config {
                api_key: None,
                model_name: Some(cli.model.clone()),
                model_url: cli.model_url.clone(),
            };
            let summarizer = AbstractiveSummarizer::new(config);
            info!("Summarizing {} input(s) with model {}", texts.len(), cli.model);
            for (i, text) in texts.iter().enumerate() {
                println!("--- Summary {} (abstractive) ---", i + 1);
                println!("{}", summarizer.summarize(text).await?);
                println!();
            }
        }
        Mode::Extractive => {
            let summarizer = ExtractiveSummarizer::new();
            for (i, text) in texts.iter().enumerate() {
                println!("--- Summary {} (extractive) ---", i + 1);
                println!("{}", summarizer.summarize(text, cli.sentences)?);
                println!();
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_used_when_no_files() {
        let texts = gather_texts(&[], Some("raw input")).unwrap();
        assert_eq!(texts, vec!["raw input".to_string()]);
    }

    #[test]
    fn test_files_take_precedence_over_text() {
        let path = std::env::temp_dir().join("tsum_cli_precedence_test.txt");
        std::fs::write(&path, "file contents").unwrap();
        let texts = gather_texts(std::slice::from_ref(&path), Some("ignored")).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(texts, vec!["file contents".to_string()]);
    }

    #[test]
    fn test_no_input_yields_empty_list() {
        assert!(gather_texts(&[], None).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = PathBuf::from("/nonexistent/tsum/input.txt");
        assert!(gather_texts(&[path], None).is_err());
    }
}
