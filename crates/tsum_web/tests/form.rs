use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;
use tsum_web::{create_app, AppState};

const BOUNDARY: &str = "tsum-test-boundary";

fn multipart_body(fields: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
            BOUNDARY, name, value
        ));
    }
    body.push_str(&format!("--{}--\r\n", BOUNDARY));
    body
}

fn post_summarize(fields: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/summarize")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(fields)))
        .unwrap()
}

async fn body_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn index_serves_the_form() {
    let app = create_app(AppState::default()).await;
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response.into_body()).await;
    assert!(html.contains("multipart/form-data"));
    assert!(html.contains("name=\"mode\""));
    assert!(html.contains("name=\"sentences\""));
}

#[tokio::test]
async fn extractive_submission_renders_summaries() {
    let app = create_app(AppState::default()).await;
    let request = post_summarize(&[
        ("mode", "extractive"),
        ("text", "Cats chase mice. Dogs sleep all day. Birds sing at dawn."),
        ("sentences", "2"),
    ]);
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response.into_body()).await;
    assert!(html.contains("<h2>Summary 1 (extractive)</h2>"));
}

#[tokio::test]
async fn abstractive_submission_with_dummy_model() {
    let app = create_app(AppState::default()).await;
    let request = post_summarize(&[
        ("mode", "abstractive"),
        ("model", "dummy"),
        ("text", "A short document for the offline backend to summarize."),
    ]);
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response.into_body()).await;
    assert!(html.contains("<h2>Summary 1 (abstractive)</h2>"));
    assert!(html.contains("A short document"));
}

#[tokio::test]
async fn files_and_pasted_text_are_both_summarized() {
    let app = create_app(AppState::default()).await;
    let request = post_summarize(&[
        ("mode", "extractive"),
        ("files", "Uploaded file sentence one. Uploaded file sentence two."),
        ("text", "Pasted text sentence."),
        ("sentences", "1"),
    ]);
    let response = app.oneshot(request).await.unwrap();
    let html = body_string(response.into_body()).await;
    assert!(html.contains("<h2>Summary 1 (extractive)</h2>"));
    assert!(html.contains("<h2>Summary 2 (extractive)</h2>"));
}

#[tokio::test]
async fn empty_submission_warns() {
    let app = create_app(AppState::default()).await;
    let request = post_summarize(&[("mode", "extractive"), ("text", "   ")]);
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response.into_body()).await;
    assert!(html.contains("Please provide text input or upload files"));
}
