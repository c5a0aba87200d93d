//! End-to-end tests for the vision tools against a mock Computer Vision service.

use iris_client::{ComputerVisionClient, SUBSCRIPTION_KEY_HEADER, VisionConfig};
use iris_mcp::McpError;
use iris_mcp::tools::{
    AnalyzeImageByDomainTool, AnalyzeImageTool, DescribeImageTool, McpTool,
    RecognizePrintedTextTool, TagImageTool, ToolRegistry,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_API_KEY: &str = "tool-test-key";
const IMAGE_URL: &str = "https://example.com/images/street.jpg";

fn setup_client(server: &MockServer) -> ComputerVisionClient {
    let config = VisionConfig::builder()
        .base_url(format!("{}/vision/v2.1", server.uri()))
        .api_key(TEST_API_KEY)
        .build()
        .expect("valid config");
    ComputerVisionClient::new(&config).expect("client builds")
}

#[tokio::test]
async fn test_registry_lists_tools_in_order() {
    let server = MockServer::start().await;
    let registry = ToolRegistry::vision(setup_client(&server));

    assert_eq!(
        registry.names(),
        vec![
            "get_area_of_interest",
            "describe_image",
            "recognize_printed_text",
            "analyze_image_by_domain",
            "tag_image",
            "analyze_image",
            "detect_objects",
            "list_models",
        ]
    );

    for tool in registry.list() {
        let schema = tool.input_schema();
        assert_eq!(schema["type"], "object", "{} schema", tool.name());
        assert!(!tool.description().is_empty());
    }
}

#[tokio::test]
async fn test_analyze_image_tool_forwards_arguments() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/vision/v2.1/analyze"))
        .and(header(SUBSCRIPTION_KEY_HEADER, TEST_API_KEY))
        .and(query_param("visualFeatures", "Tags,Objects"))
        .and(query_param("details", "Landmarks"))
        .and(body_json(json!({"url": IMAGE_URL})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tags": [{"name": "street", "confidence": 0.97}],
            "objects": [{"object": "car", "confidence": 0.8, "rectangle": {"x": 1, "y": 2, "w": 3, "h": 4}}],
            "requestId": "req-a"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tool = AnalyzeImageTool::new(setup_client(&server));
    let result = tool
        .execute(json!({
            "url": IMAGE_URL,
            "visualFeatures": ["tags", "Objects"],
            "details": "Landmarks"
        }))
        .await
        .unwrap();

    assert_eq!(result["tags"][0]["name"], "street");
    assert_eq!(result["objects"][0]["rectangle"]["w"], 3);
    assert_eq!(result["requestId"], "req-a");
}

#[tokio::test]
async fn test_describe_image_tool_max_candidates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/vision/v2.1/describe"))
        .and(query_param("maxCandidates", "2"))
        .and(query_param("descriptionExclude", "Celebrities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "description": {
                "tags": ["street", "car"],
                "captions": [
                    {"text": "a car parked on a street", "confidence": 0.91},
                    {"text": "a street with cars", "confidence": 0.72}
                ]
            },
            "requestId": "req-d"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tool = DescribeImageTool::new(setup_client(&server));
    let result = tool
        .execute(json!({
            "url": IMAGE_URL,
            "maxCandidates": 2,
            "descriptionExclude": ["Celebrities"]
        }))
        .await
        .unwrap();

    assert_eq!(result["description"]["captions"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_ocr_tool_respects_detect_orientation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/vision/v2.1/ocr"))
        .and(query_param("detectOrientation", "false"))
        .and(query_param("language", "de"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "language": "de",
            "textAngle": 0.0,
            "orientation": "Up",
            "regions": [{"boundingBox": "10,10,50,20", "lines": [{"boundingBox": "10,10,50,20", "words": [{"boundingBox": "10,10,50,20", "text": "Ausfahrt"}]}]}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tool = RecognizePrintedTextTool::new(setup_client(&server));
    let result = tool
        .execute(json!({"url": IMAGE_URL, "detectOrientation": false, "language": "de"}))
        .await
        .unwrap();

    assert_eq!(result["regions"][0]["lines"][0]["words"][0]["text"], "Ausfahrt");
}

#[tokio::test]
async fn test_domain_tool_uses_model_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/vision/v2.1/models/celebrities/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {"celebrities": [{"name": "Jane Doe", "confidence": 0.93,
                "faceRectangle": {"left": 10, "top": 20, "width": 30, "height": 40}}]},
            "requestId": "req-c"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tool = AnalyzeImageByDomainTool::new(setup_client(&server));
    let result = tool
        .execute(json!({"model": "celebrities", "url": IMAGE_URL}))
        .await
        .unwrap();

    assert_eq!(result["result"]["celebrities"][0]["name"], "Jane Doe");
}

#[tokio::test]
async fn test_registry_executes_list_models() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vision/v2.1/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [
                {"name": "celebrities", "categories": ["people_", "人_"]},
                {"name": "landmarks", "categories": ["outdoor_", "building_"]}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let registry = ToolRegistry::vision(setup_client(&server));
    let result = registry.execute("list_models", json!({})).await.unwrap();
    assert_eq!(result["models"][1]["name"], "landmarks");
}

#[tokio::test]
async fn test_invalid_input_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = setup_client(&server);

    let missing_url = TagImageTool::new(client.clone()).execute(json!({})).await;
    assert!(matches!(missing_url, Err(McpError::InvalidInput(_))));

    let bad_feature = AnalyzeImageTool::new(client.clone())
        .execute(json!({"url": IMAGE_URL, "visualFeatures": ["Sharpness"]}))
        .await;
    assert!(matches!(bad_feature, Err(McpError::InvalidInput(ref m)) if m.contains("Sharpness")));

    let zero_candidates = DescribeImageTool::new(client.clone())
        .execute(json!({"url": IMAGE_URL, "maxCandidates": 0}))
        .await;
    assert!(matches!(zero_candidates, Err(McpError::InvalidInput(_))));

    let missing_model = AnalyzeImageByDomainTool::new(client)
        .execute(json!({"url": IMAGE_URL}))
        .await;
    assert!(matches!(missing_model, Err(McpError::InvalidInput(ref m)) if m.contains("model")));
}

#[tokio::test]
async fn test_upstream_error_reaches_caller_verbatim() {
    let server = MockServer::start().await;
    let payload = json!({
        "code": "InvalidImageUrl",
        "requestId": "1b3c5d7e-0000-4000-8000-123456789abc",
        "message": "Image URL is badly formatted."
    });
    Mock::given(method("POST"))
        .and(path("/vision/v2.1/tag"))
        .respond_with(ResponseTemplate::new(400).set_body_json(payload.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let tool = TagImageTool::new(setup_client(&server));
    let err = tool.execute(json!({"url": "not-a-url"})).await.unwrap_err();

    assert!(matches!(err, McpError::Upstream(_)));
    let message: serde_json::Value = serde_json::from_str(&err.caller_message()).unwrap();
    assert_eq!(message, payload);
}

#[tokio::test]
async fn test_unknown_tool_is_not_found() {
    let server = MockServer::start().await;
    let registry = ToolRegistry::vision(setup_client(&server));

    let err = registry
        .execute("read_handwriting", json!({"url": IMAGE_URL}))
        .await
        .unwrap_err();
    assert!(matches!(err, McpError::ToolNotFound(ref name) if name == "read_handwriting"));
}
