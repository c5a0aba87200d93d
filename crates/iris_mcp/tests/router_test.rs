//! Tests for the MCP router surface.

use iris_client::{ComputerVisionClient, VisionConfig};
use iris_core::{DetectResult, json};
use iris_mcp::{IrisRouter, Router, ToolRegistry};
use mcp_spec::content::Content;
use mcp_spec::handler::ToolError;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const IMAGE_URL: &str = "https://example.com/images/cat.png";

fn setup_router(server: &MockServer) -> IrisRouter {
    let config = VisionConfig::builder()
        .base_url(format!("{}/vision/v2.1", server.uri()))
        .api_key("router-test-key")
        .build()
        .expect("valid config");
    let client = ComputerVisionClient::new(&config).expect("client builds");

    IrisRouter::builder()
        .name("iris-test")
        .version("0.0.1")
        .tools(ToolRegistry::vision(client))
        .build()
}

fn text_of(content: &[Content]) -> String {
    assert_eq!(content.len(), 1);
    match &content[0] {
        Content::Text(text) => text.text.clone(),
        _ => panic!("expected text content"),
    }
}

#[tokio::test]
async fn test_router_metadata() {
    let server = MockServer::start().await;
    let router = setup_router(&server);

    assert_eq!(router.name(), "iris-test");
    assert!(router.instructions().contains("v0.0.1"));
    assert!(router.instructions().contains("recognize_printed_text"));

    let tools = router.list_tools();
    assert_eq!(tools.len(), 8);
    assert_eq!(tools[0].name, "get_area_of_interest");
    assert_eq!(tools[7].name, "list_models");
    assert_eq!(tools[3].input_schema["required"], json!(["model", "url"]));
}

#[tokio::test]
async fn test_call_tool_returns_json_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/vision/v2.1/areaOfInterest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "areaOfInterest": {"x": 12, "y": 0, "w": 200, "h": 180},
            "requestId": "req-aoi",
            "metadata": {"width": 400, "height": 300, "format": "Png"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let router = setup_router(&server);
    let content = router
        .call_tool("get_area_of_interest", json!({"url": IMAGE_URL}))
        .await
        .unwrap();

    let body: Value = serde_json::from_str(&text_of(&content)).unwrap();
    assert_eq!(body["areaOfInterest"]["w"], 200);
    assert_eq!(body["metadata"]["format"], "Png");
}

#[tokio::test]
async fn test_call_tool_error_mapping() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/vision/v2.1/detect"))
        .respond_with(ResponseTemplate::new(415).set_body_json(json!({
            "error": {"code": "InvalidImageFormat", "message": "Input data is not a valid image."}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let router = setup_router(&server);

    let not_found = router.call_tool("no_such_tool", json!({})).await;
    assert!(matches!(not_found, Err(ToolError::NotFound(_))));

    let invalid = router.call_tool("detect_objects", json!({"url": 7})).await;
    assert!(matches!(invalid, Err(ToolError::InvalidParameters(_))));

    match router
        .call_tool("detect_objects", json!({"url": IMAGE_URL}))
        .await
    {
        Err(ToolError::ExecutionError(message)) => {
            let payload: Value = serde_json::from_str(&message).unwrap();
            assert_eq!(
                payload,
                json!({"code": "InvalidImageFormat", "message": "Input data is not a valid image."})
            );
        }
        other => panic!("expected execution error, got {:?}", other.map(|c| c.len())),
    }
}

#[tokio::test]
async fn test_upstream_error_text_sent_to_caller() {
    let server = MockServer::start().await;
    let payload = json!({
        "code": "InvalidImageUrl",
        "requestId": "r-9",
        "message": "Image URL is badly formatted."
    });
    Mock::given(method("POST"))
        .and(path("/vision/v2.1/tag"))
        .respond_with(ResponseTemplate::new(400).set_body_json(payload.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let router = setup_router(&server);
    let err = router
        .call_tool("tag_image", json!({"url": "not-a-url"}))
        .await
        .unwrap_err();

    // RouterService puts the error's display text in the isError tool result.
    let text = err.to_string();
    assert_eq!(
        text,
        r#"Execution failed: {"code":"InvalidImageUrl","message":"Image URL is badly formatted.","requestId":"r-9"}"#
    );
    let sent: Value =
        serde_json::from_str(text.strip_prefix("Execution failed: ").unwrap()).unwrap();
    assert_eq!(sent, payload);
}

#[tokio::test]
async fn test_call_tool_renders_deep_hierarchy() {
    let depth = 1_000;
    let mut chain = String::new();
    for level in 0..depth {
        chain.push_str(&format!(r#"{{"object":"n{}","parent":"#, level));
    }
    chain.push_str(r#"{"object":"entity"}"#);
    chain.push_str(&"}".repeat(depth));

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/vision/v2.1/detect"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"{{"objects":[{{"object":"dog","parent":{}}}],"requestId":"req-deep"}}"#,
            chain
        )))
        .expect(1)
        .mount(&server)
        .await;

    let router = setup_router(&server);
    let content = router
        .call_tool("detect_objects", json!({"url": IMAGE_URL}))
        .await
        .unwrap();

    let result: DetectResult = json::from_str(&text_of(&content)).unwrap();
    assert_eq!(result.request_id.as_deref(), Some("req-deep"));
    assert_eq!(result.objects[0].ancestors().count(), depth + 1);
}

#[tokio::test]
async fn test_router_serves_no_resources_or_prompts() {
    let server = MockServer::start().await;
    let router = setup_router(&server);

    assert!(router.list_resources().is_empty());
    assert!(router.list_prompts().is_empty());
    assert!(router.read_resource("iris://anything").await.is_err());
    assert!(router.get_prompt("anything").await.is_err());
}
