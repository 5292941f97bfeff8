use async_trait::async_trait;
use axum::{body::Body, Router};
use gemini_wrapper::{
    build_app,
    gemini::{GenerationError, TextGenerator},
    AppState,
};
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

enum Reply {
    Text(&'static str),
    Fail(&'static str),
}

struct StubGenerator {
    reply: Reply,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.reply {
            Reply::Text(text) => Ok(text.to_string()),
            Reply::Fail(message) => Err(GenerationError::Other(message.to_string())),
        }
    }
}

fn test_app(generator: Arc<StubGenerator>) -> Router {
    build_app(AppState::new(generator))
}

fn generate_request(body: &'static str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/generate")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn generate_returns_generated_text() {
    let generator = StubGenerator::new(Reply::Text("Hi there!"));
    let app = test_app(generator.clone());

    let (status, body) = send(app, generate_request(r#"{"prompt":"Say hi"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"status":"success","text":"Hi there!"}"#);
    assert_eq!(generator.prompts(), vec!["Say hi".to_string()]);
}

#[tokio::test]
async fn missing_prompt_is_rejected_before_generation() {
    let generator = StubGenerator::new(Reply::Text("unused"));
    let app = test_app(generator.clone());

    let (status, body) = send(app, generate_request("{}")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"No prompt provided"}"#);
    assert!(generator.prompts().is_empty());
}

#[tokio::test]
async fn empty_and_null_prompts_are_rejected() {
    for payload in [
        r#"{"prompt":""}"#,
        r#"{"prompt":null}"#,
        r#"{"prompt":false}"#,
        r#"{"prompt":0}"#,
        r#"{"prompt":[]}"#,
        r#"{"prompt":{}}"#,
    ] {
        let generator = StubGenerator::new(Reply::Text("unused"));
        let (status, body) = send(test_app(generator.clone()), generate_request(payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {payload}");
        assert_eq!(body, r#"{"error":"No prompt provided"}"#);
        assert!(generator.prompts().is_empty());
    }
}

#[tokio::test]
async fn prompt_is_forwarded_verbatim() {
    let generator = StubGenerator::new(Reply::Text("ok"));
    let app = test_app(generator.clone());

    let (status, _) = send(
        app,
        generate_request(r#"{"prompt":"  padded\n","extra":true}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(generator.prompts(), vec!["  padded\n".to_string()]);
}

#[tokio::test]
async fn generator_failure_maps_to_internal_error() {
    let generator = StubGenerator::new(Reply::Fail("quota exceeded"));
    let app = test_app(generator);

    let (status, body) = send(app, generate_request(r#"{"prompt":"x"}"#)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"error":"quota exceeded"}"#);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let generator = StubGenerator::new(Reply::Text("unused"));
    let app = test_app(generator.clone());

    let (status, body) = send(app, generate_request(r#"{"prompt":"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with(r#"{"error":"#));
    assert!(generator.prompts().is_empty());
}

#[tokio::test]
async fn non_string_prompt_is_bad_request() {
    let generator = StubGenerator::new(Reply::Text("unused"));
    let app = test_app(generator.clone());

    let (status, body) = send(app, generate_request(r#"{"prompt":123}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"prompt must be a string"}"#);
    assert!(generator.prompts().is_empty());
}

#[tokio::test]
async fn missing_content_type_is_bad_request() {
    let generator = StubGenerator::new(Reply::Text("unused"));
    let app = test_app(generator.clone());
    let request = Request::builder()
        .method(Method::POST)
        .uri("/generate")
        .body(Body::from(r#"{"prompt":"Say hi"}"#))
        .unwrap();

    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with(r#"{"error":"#));
    assert!(generator.prompts().is_empty());
}

#[tokio::test]
async fn health_is_ok_even_when_generator_fails() {
    let generator = StubGenerator::new(Reply::Fail("upstream down"));
    let app = test_app(generator.clone());

    let (status, body) = send(app, get_request("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
    assert!(generator.prompts().is_empty());
}

#[tokio::test]
async fn unknown_route_returns_not_found() {
    let app = test_app(StubGenerator::new(Reply::Text("unused")));

    let (status, body) = send(app, get_request("/")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"error":"Not found"}"#);
}
