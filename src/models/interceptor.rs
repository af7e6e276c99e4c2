//! Gateway interceptor event and response shapes.
//!
//! The gateway hands the interceptor Lambda the incoming request and expects
//! the (possibly rewritten) request back before forwarding it to the API.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Version tag the gateway expects on every interceptor response.
pub const INTERCEPTOR_OUTPUT_VERSION: &str = "1.0";

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InterceptorEvent {
    pub interceptor_input_version: String,
    pub mcp: McpData,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct McpData {
    pub gateway_request: GatewayRequest,
}

/// Request as seen by the gateway. Only headers and body may be rewritten.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InterceptorResponse {
    pub interceptor_output_version: String,
    pub mcp: McpResponse,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct McpResponse {
    pub transformed_gateway_request: GatewayRequest,
}

impl InterceptorResponse {
    /// Wraps a gateway request into the response envelope.
    #[must_use]
    pub fn forward(request: GatewayRequest) -> Self {
        Self {
            interceptor_output_version: INTERCEPTOR_OUTPUT_VERSION.to_string(),
            mcp: McpResponse {
                transformed_gateway_request: request,
            },
        }
    }
}
