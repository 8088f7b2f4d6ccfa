//! Router-level tests: the three end-to-end form scenarios plus the raw
//! probe route, driven through the real axum router with the mock gateway.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use devrel_relay::connector::api::{build_router, Container};
use devrel_relay::{MockAssistantGateway, MockBehavior, PromptTemplates};

const ASSISTANT: &str = "devrel-library";

fn templates() -> PromptTemplates {
    PromptTemplates::from_toml_str(
        r#"
prefix = "You are the DevRel Library assistant."
beginner = "Explain for someone new to developer relations."
"#,
    )
    .expect("templates should parse")
}

fn app_with(gateway: Arc<MockAssistantGateway>) -> Router {
    let container =
        Container::with_gateway(gateway, templates(), ASSISTANT).expect("container builds");
    build_router(Arc::new(container))
}

fn post_form(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body is utf-8")
}

#[tokio::test]
async fn get_renders_the_empty_form() {
    let app = app_with(Arc::new(MockAssistantGateway::healthy()));

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_string(response).await;
    assert!(page.contains("<form"));
    assert!(page.contains("name=\"message\""));
    assert!(!page.contains("class=\"error\""));
}

#[tokio::test]
async fn post_with_healthy_assistant_renders_the_answer() {
    let gateway = Arc::new(MockAssistantGateway::new(MockBehavior::Healthy {
        reply: "# Tips\n- One\n- Two".to_string(),
    }));
    let app = app_with(gateway.clone());

    let response = app
        .oneshot(post_form(
            "message=How+do+I+measure+DevRel+success%3F&experience_level=beginner",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_string(response).await;
    assert!(page.contains("<h1>Tips</h1>"));
    assert_eq!(page.matches("<li>").count(), 2);
    assert!(!page.contains("class=\"error\""));
    assert_eq!(gateway.chat_calls(), 1);
}

#[tokio::test]
async fn post_with_empty_message_shows_the_inline_error() {
    let gateway = Arc::new(MockAssistantGateway::healthy());
    let app = app_with(gateway.clone());

    let response = app.oneshot(post_form("message=")).await.unwrap();

    // Form routes always answer 200 with the error inline.
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_string(response).await;
    assert!(page.contains("Please enter a question."));
    assert_eq!(gateway.resolve_calls(), 0);
    assert_eq!(gateway.chat_calls(), 0);
}

#[tokio::test]
async fn post_with_missing_assistant_shows_not_found_messaging() {
    let gateway = Arc::new(MockAssistantGateway::new(MockBehavior::ResolveStatus(404)));
    let app = app_with(gateway);

    let response = app
        .oneshot(post_form("message=What+is+DevRel%3F"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_string(response).await;
    assert!(page.contains("could not be found"));
    assert!(!page.contains("<h1>Tips</h1>"));
}

#[tokio::test]
async fn probe_reports_the_mapped_status_directly() {
    let app = app_with(Arc::new(MockAssistantGateway::healthy()));
    let response = app
        .oneshot(Request::get("/probe").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, format!("ok: {ASSISTANT}"));

    for (remote_status, expected) in [
        (401u16, StatusCode::UNAUTHORIZED),
        (404u16, StatusCode::NOT_FOUND),
        (500u16, StatusCode::INTERNAL_SERVER_ERROR),
    ] {
        let app = app_with(Arc::new(MockAssistantGateway::new(
            MockBehavior::ResolveStatus(remote_status),
        )));
        let response = app
            .oneshot(Request::get("/probe").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), expected);
    }
}
