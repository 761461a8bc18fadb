use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Html;
use std::sync::Arc;
use tracing::info;
use tsum_core::Mode;
use tsum_inference::{AbstractiveSummarizer, Config, ExtractiveSummarizer};

use crate::views;
use crate::AppState;

type HandlerResult = Result<Html<String>, (StatusCode, String)>;

fn internal(err: impl std::fmt::Display) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(views::render_index(&state.default_model, &state.model_choices))
}

struct Submission {
    texts: Vec<String>,
    mode: Mode,
    model: String,
    sentences: usize,
}

async fn parse_submission(
    state: &AppState,
    mut multipart: Multipart,
) -> Result<Submission, (StatusCode, String)> {
    let mut texts = Vec::new();
    let mut pasted = String::new();
    let mut mode = Mode::Abstractive;
    let mut model = state.default_model.clone();
    let mut sentences = 3usize;

    while let Some(field) = multipart.next_field().await.map_err(internal)? {
        match field.name().unwrap_or("") {
            "files" => {
                let content = field.text().await.map_err(internal)?;
                if !content.trim().is_empty() {
                    texts.push(content);
                }
            }
            "text" => pasted = field.text().await.map_err(internal)?,
            "mode" => {
                let raw = field.text().await.map_err(internal)?;
                mode = raw
                    .parse()
                    .map_err(|_| (StatusCode::BAD_REQUEST, format!("unknown mode: {}", raw)))?;
            }
            "model" => model = field.text().await.map_err(internal)?,
            "sentences" => {
                let raw = field.text().await.map_err(internal)?;
                sentences = raw.trim().parse().map_err(|_| {
                    (StatusCode::BAD_REQUEST, format!("invalid sentence count: {}", raw))
                })?;
            }
            _ => {}
        }
    }

    // unlike the CLI, uploaded files and pasted text are both used
    if !pasted.trim().is_empty() {
        texts.push(pasted);
    }

    Ok(Submission {
        texts,
        mode,
        model,
        sentences,
    })
}

pub async fn summarize(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> HandlerResult {
    let submission = parse_submission(&state, multipart).await?;
    if submission.texts.is_empty() {
        return Ok(Html(views::render_warning(
            "Please provide text input or upload files",
        )));
    }

    info!(
        "Summarizing {} input(s), mode {}",
        submission.texts.len(),
        submission.mode
    );

    let mut summaries = Vec::with_capacity(submission.texts.len());
    match submission.mode {
        Mode::Abstractive => {
            let config = Config {
                api_key: None,
                model_name: Some(submission.model.clone()),
                model_url: state.model_url.clone(),
            };
            let summarizer = AbstractiveSummarizer::new(config);
            for text in &submission.texts {
                summaries.push(summarizer.summarize(text).await.map_err(internal)?);
            }
        }
        Mode::Extractive => {
            let summarizer = ExtractiveSummarizer::new();
            for text in &submission.texts {
                summaries.push(
                    summarizer
                        .summarize(text, submission.sentences)
                        .map_err(internal)?,
                );
            }
        }
    }

    Ok(Html(views::render_results(submission.mode, &summaries)))
}
