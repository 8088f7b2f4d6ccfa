//! Use-case level tests for the question relay flow.
//!
//! These drive the orchestrator end to end with the mock gateway and the
//! real renderer, verifying both the happy path and every error mapping.

use std::io::Write;
use std::sync::Arc;

use devrel_relay::{
    AskQuestionUseCase, ExperienceLevel, MarkdownRenderer, MockAssistantGateway, MockBehavior,
    PromptTemplates, Question, RelayError,
};

const ASSISTANT: &str = "devrel-library";

fn templates() -> PromptTemplates {
    PromptTemplates::from_toml_str(
        r#"
prefix = "You are the DevRel Library assistant."
beginner = "Explain for someone new to developer relations."
advanced = "Assume deep familiarity with developer relations."
"#,
    )
    .expect("templates should parse")
}

fn use_case_with(gateway: Arc<MockAssistantGateway>) -> AskQuestionUseCase {
    AskQuestionUseCase::new(
        gateway,
        Arc::new(MarkdownRenderer::new()),
        Arc::new(templates()),
        ASSISTANT,
    )
}

#[tokio::test]
async fn healthy_flow_renders_markdown_answer() {
    let gateway = Arc::new(MockAssistantGateway::new(MockBehavior::Healthy {
        reply: "# Tips\n- One\n- Two".to_string(),
    }));
    let use_case = use_case_with(gateway.clone());

    let answer = use_case
        .execute("How do I measure DevRel success?", Some("beginner"))
        .await
        .expect("healthy flow should succeed");

    let html = answer.as_html();
    assert!(html.contains("<h1>Tips</h1>"));
    assert_eq!(html.matches("<li>").count(), 2);
    assert_eq!(gateway.resolve_calls(), 1);
    assert_eq!(gateway.chat_calls(), 1);
}

#[tokio::test]
async fn empty_question_never_reaches_the_gateway() {
    let gateway = Arc::new(MockAssistantGateway::healthy());
    let use_case = use_case_with(gateway.clone());

    let err = use_case.execute("", None).await.unwrap_err();
    assert!(matches!(err, RelayError::InvalidInput(_)));

    let err = use_case.execute("   \n\t ", Some("beginner")).await.unwrap_err();
    assert!(matches!(err, RelayError::InvalidInput(_)));

    assert_eq!(gateway.resolve_calls(), 0);
    assert_eq!(gateway.chat_calls(), 0);
}

#[tokio::test]
async fn resolution_statuses_map_to_the_taxonomy() {
    for (status, check) in [
        (401u16, RelayError::is_unauthorized as fn(&RelayError) -> bool),
        (404u16, RelayError::is_not_found as fn(&RelayError) -> bool),
    ] {
        let gateway = Arc::new(MockAssistantGateway::new(MockBehavior::ResolveStatus(status)));
        let use_case = use_case_with(gateway.clone());

        let err = use_case.execute("What is DevRel?", None).await.unwrap_err();
        assert!(check(&err), "status {status} mapped to {err:?}");
        assert_eq!(gateway.chat_calls(), 0, "chat must not run after a failed resolve");
    }

    let gateway = Arc::new(MockAssistantGateway::new(MockBehavior::ResolveStatus(503)));
    let use_case = use_case_with(gateway);
    let err = use_case.execute("What is DevRel?", None).await.unwrap_err();
    assert!(matches!(err, RelayError::ServiceError(_)));
}

#[tokio::test]
async fn chat_failures_split_connection_from_generic() {
    let gateway = Arc::new(MockAssistantGateway::new(MockBehavior::ChatFailure(
        "connection refused by upstream".to_string(),
    )));
    let err = use_case_with(gateway)
        .execute("What is DevRel?", None)
        .await
        .unwrap_err();
    assert!(err.is_connection_error());

    let gateway = Arc::new(MockAssistantGateway::new(MockBehavior::ChatFailure(
        "upstream exploded".to_string(),
    )));
    let err = use_case_with(gateway)
        .execute("What is DevRel?", None)
        .await
        .unwrap_err();
    assert!(matches!(err, RelayError::ServiceError(_)));
}

#[tokio::test]
async fn reply_without_content_is_malformed() {
    let gateway = Arc::new(MockAssistantGateway::new(MockBehavior::EmptyReply));
    let err = use_case_with(gateway)
        .execute("What is DevRel?", None)
        .await
        .unwrap_err();
    assert!(matches!(err, RelayError::MalformedReply(_)));
}

#[tokio::test]
async fn empty_templates_fail_before_the_gateway() {
    let gateway = Arc::new(MockAssistantGateway::healthy());
    let use_case = AskQuestionUseCase::new(
        gateway.clone(),
        Arc::new(MarkdownRenderer::new()),
        Arc::new(PromptTemplates::empty()),
        ASSISTANT,
    );

    let err = use_case.execute("What is DevRel?", None).await.unwrap_err();
    assert!(matches!(err, RelayError::ConfigurationMissing(_)));
    assert_eq!(gateway.resolve_calls(), 0);
}

#[test]
fn templates_load_from_a_file_on_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "prefix = \"You are the DevRel Library assistant.\"\nbeginner = \"Explain simply.\""
    )
    .expect("write template document");

    let templates = PromptTemplates::load(file.path()).expect("load should succeed");
    let question = Question::new("What is DevRel?").unwrap();
    let prompt = templates
        .compose(&question, ExperienceLevel::Beginner)
        .unwrap();

    assert_eq!(
        prompt.as_str(),
        "You are the DevRel Library assistant. Explain simply. What is DevRel?"
    );
}
