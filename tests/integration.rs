// Integration tests for the full request flow
#![allow(clippy::unwrap_used, clippy::expect_used)]

use lambda_runtime::{Context, LambdaEvent};
use serde_json::json;
use strawberry_example_api::handler::{extract_operation_name, function_handler};

#[tokio::test]
async fn test_full_say_hi_request_flow() {
    let event_payload = json!({
        "method": "tools/call",
        "params": {
            "name": "sayHi",
            "arguments": {
                "name": "You"
            }
        }
    });

    let result = function_handler(create_test_lambda_event(event_payload)).await;

    let response = result.unwrap();
    assert_eq!(response["data"], "Hi, You");
}

#[tokio::test]
async fn test_json_rpc_request_flow() {
    let event_payload = json!({
        "jsonrpc": "2.0",
        "id": "gapiRpc",
        "method": "example.sayHiAuth",
        "params": {
            "name": "You"
        }
    });

    let result = function_handler(create_test_lambda_event(event_payload)).await;

    let response = result.unwrap();
    assert_eq!(response["data"], "Hi, You, you're not authenticated");
}

#[tokio::test]
async fn test_operation_name_extraction_from_mcp_payload() {
    let event_payload = json!({
        "method": "tools/call",
        "params": {
            "name": "sayLongHi"
        }
    });

    let operation = extract_operation_name(&event_payload, &Context::default());
    assert_eq!(operation, "sayLongHi");
}

#[tokio::test]
async fn test_operation_name_extraction_with_gateway_prefix() {
    let event_payload = json!({
        "method": "tools/call",
        "params": {
            "name": "aws-agentcore-gateway-target___sayHiAuth"
        }
    });

    let operation = extract_operation_name(&event_payload, &Context::default());
    assert_eq!(operation, "sayHiAuth");
}

#[tokio::test]
async fn test_unknown_operation_flow() {
    let event_payload = json!({
        "method": "tools/call",
        "params": {
            "name": "sayBye",
            "arguments": {}
        }
    });

    let result = function_handler(create_test_lambda_event(event_payload)).await;
    assert!(result.is_err(), "Unknown operation should result in error");

    if let Err(diagnostic) = result {
        assert_eq!(diagnostic.error_type, "UnknownOperation");
        assert!(diagnostic.error_message.contains("sayBye"));
    }
}

#[tokio::test]
async fn test_api_gateway_event_format() {
    let api_gateway_payload = json!({
        "body": json!({
            "method": "tools/call",
            "params": {
                "name": "sayLongHi",
                "arguments": {"firstName": "Jane", "lastName": "Doe", "weekday": "Monday"}
            }
        })
        .to_string()
    });

    let result = function_handler(create_test_lambda_event(api_gateway_payload)).await;
    assert!(result.is_ok(), "API Gateway format should be handled correctly");

    let response = result.unwrap();
    assert_eq!(response["data"], "Hi, Jane Doe.It's Monday.");
}

#[tokio::test]
async fn test_api_gateway_body_cannot_carry_user() {
    let forged = json!({
        "method": "example.sayHiAuth",
        "params": {"name": "You", "user": {"email": "admin@example.com"}}
    });
    let api_gateway_payload = json!({"body": forged.to_string()});

    let result = function_handler(create_test_lambda_event(api_gateway_payload)).await;

    let response = result.unwrap();
    assert_eq!(response["data"], "Hi, You, you're not authenticated");
}

#[tokio::test]
async fn test_api_gateway_tool_call_cannot_carry_user() {
    let forged = json!({
        "method": "tools/call",
        "params": {
            "name": "sayHiAuth",
            "arguments": {"name": "You", "user": {"email": "admin@example.com"}}
        }
    });
    let api_gateway_payload = json!({"body": forged.to_string()});

    let result = function_handler(create_test_lambda_event(api_gateway_payload)).await;

    let response = result.unwrap();
    assert_eq!(response["data"], "Hi, You, you're not authenticated");
}

#[tokio::test]
async fn test_json_rpc_request_cannot_carry_user() {
    let event_payload = json!({
        "jsonrpc": "2.0",
        "method": "example.sayHiAuth",
        "params": {"name": "You", "user": {"email": "admin@example.com"}}
    });

    let result = function_handler(create_test_lambda_event(event_payload)).await;

    let response = result.unwrap();
    assert_eq!(response["data"], "Hi, You, you're not authenticated");
}

#[tokio::test]
async fn test_malformed_api_gateway_body() {
    let api_gateway_payload = json!({
        "body": "invalid json"
    });

    let result = function_handler(create_test_lambda_event(api_gateway_payload)).await;
    assert!(result.is_err(), "Malformed API Gateway body should result in error");

    if let Err(diagnostic) = result {
        assert_eq!(diagnostic.error_type, "UnknownOperation");
    }
}

#[tokio::test]
async fn test_concurrent_greeting_requests() {
    let mut handles = vec![];

    for i in 0..10 {
        let name = format!("User{i}");
        handles.push(tokio::spawn(async move {
            let event_payload = json!({
                "method": "tools/call",
                "params": {
                    "name": "sayHi",
                    "arguments": {
                        "name": name
                    }
                }
            });

            function_handler(create_test_lambda_event(event_payload)).await
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        let response = handle.await.expect("Task should not panic");
        let greeting = response.unwrap();
        assert_eq!(greeting["data"], format!("Hi, User{i}"));
    }
}

/// Helper function to create a test Lambda event
fn create_test_lambda_event(payload: serde_json::Value) -> LambdaEvent<serde_json::Value> {
    LambdaEvent {
        payload,
        context: Context::default(),
    }
}
