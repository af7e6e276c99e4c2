use lambda_runtime::tracing::{debug, error, info, warn};
use lambda_runtime::{Context, Diagnostic, LambdaEvent};
use serde_json::{Map, Value};

use crate::config::config;
use crate::interceptor::USER_ARGUMENT;
use crate::models::{AppError, SayHiAuthRequest, SayHiRequest, SayLongHiRequest};
use crate::operations::{SAY_HI, SAY_HI_AUTH, SAY_LONG_HI};
use crate::tools::{say_hi, say_hi_auth, say_long_hi};
use crate::utils::normalize_operation_name;

const TOOLS_CALL: &str = "tools/call";
const GATEWAY_TOOL_NAME_KEY: &str = "bedrockAgentCoreToolName";
const UNKNOWN_OPERATION: &str = "unknown";

fn is_tool_call(event_payload: &Value) -> bool {
    event_payload.get("method").and_then(Value::as_str) == Some(TOOLS_CALL)
}

/// Extracts the operation name from the Lambda context or the event payload.
///
/// Lookup order:
/// 1. `context.client_context.custom[bedrockAgentCoreToolName]`, set by the gateway
/// 2. `params.name` of an MCP `tools/call` request
/// 3. `method` of a JSON-RPC request such as `example.sayHi`
///
/// Gateway prefixes and the API namespace are stripped. Falls back to `"unknown"`.
#[must_use]
pub fn extract_operation_name(event_payload: &Value, context: &Context) -> String {
    debug!(
        "Extracting operation name from context: {:?}",
        context.client_context
    );
    let api_name = &config().name;

    if let Some(name) = context
        .client_context
        .as_ref()
        .and_then(|cc| cc.custom.get(GATEWAY_TOOL_NAME_KEY))
        .map(String::as_str)
    {
        debug!("Found operation name in context: {name}");
        return normalize_operation_name(name, api_name);
    }

    let method = event_payload.get("method").and_then(Value::as_str);
    let mcp_name = event_payload
        .get("params")
        .and_then(|params| params.get("name"))
        .and_then(Value::as_str);

    match (method, mcp_name) {
        (Some(TOOLS_CALL), Some(name)) => {
            debug!("Found operation name in MCP payload: {name}");
            normalize_operation_name(name, api_name)
        }
        (Some(method), _) if method != TOOLS_CALL => {
            debug!("Found operation name in JSON-RPC method: {method}");
            normalize_operation_name(method, api_name)
        }
        _ => {
            debug!("Operation name not found, using unknown");
            UNKNOWN_OPERATION.to_string()
        }
    }
}

/// Picks the operation arguments out of the request envelope.
fn extract_arguments(mut event_payload: Value) -> Value {
    let is_tool_call = is_tool_call(&event_payload);

    if let Some(params) = event_payload.get_mut("params") {
        return match params.get_mut("arguments") {
            Some(arguments) => arguments.take(),
            // tools/call params hold the name, never the arguments themselves
            None if is_tool_call => Value::Object(Map::new()),
            None => params.take(),
        };
    }

    event_payload
}

/// Routes an operation request to its handler.
///
/// A `user` argument is honoured only inside an MCP `tools/call` envelope,
/// the one request shape the gateway interceptor rewrites. On every other
/// shape it came from the client and is dropped.
///
/// # Errors
///
/// Returns a `Diagnostic` if the operation is unknown, the arguments do not
/// match its request type, or the response cannot be serialized.
pub fn route_operation(operation: &str, event_payload: Value) -> Result<Value, Diagnostic> {
    let user_trusted = is_tool_call(&event_payload);
    route(operation, event_payload, user_trusted)
}

fn route(operation: &str, event_payload: Value, user_trusted: bool) -> Result<Value, Diagnostic> {
    debug!(operation = %operation, "Routing operation with payload: {event_payload:?}");

    let mut arguments = extract_arguments(event_payload);
    if !user_trusted {
        drop_client_user(&mut arguments, operation);
    }
    debug!("Extracted operation arguments: {arguments:?}");

    dispatch(operation, arguments).map_err(Diagnostic::from)
}

fn drop_client_user(arguments: &mut Value, operation: &str) {
    if arguments
        .as_object_mut()
        .and_then(|args| args.remove(USER_ARGUMENT))
        .is_some()
    {
        warn!(operation = %operation, "Dropped client-supplied user argument");
    }
}

/// Route table of the API: each exposed name maps to one typed request and one handler.
fn dispatch(operation: &str, arguments: Value) -> Result<Value, AppError> {
    macro_rules! handle_operation {
        ($operation_fn:expr, $request_type:ty) => {{
            let request: $request_type = serde_json::from_value(arguments).map_err(|e| {
                error!(error = %e, "Failed to parse request");
                AppError::InvalidInput(e.to_string())
            })?;

            serde_json::to_value($operation_fn(&request)).map_err(|e| {
                error!(error = %e, "Failed to serialize response");
                AppError::Serialization(e.to_string())
            })
        }};
    }

    match operation {
        SAY_HI => handle_operation!(say_hi, SayHiRequest),
        SAY_HI_AUTH => handle_operation!(say_hi_auth, SayHiAuthRequest),
        SAY_LONG_HI => handle_operation!(say_long_hi, SayLongHiRequest),
        _ => {
            error!(operation = %operation, "Unknown operation requested");
            Err(AppError::UnknownOperation(operation.to_string()))
        }
    }
}

/// Lambda event handler.
///
/// Accepts direct invocations, JSON-RPC requests, MCP `tools/call` requests
/// and API Gateway events whose `body` holds one of those as a JSON string.
/// API Gateway requests bypass the interceptor, so their `user` is never trusted.
///
/// # Errors
///
/// Returns a `Diagnostic` with one of the following types:
///
/// - `InvalidInput`: the arguments do not match the operation's request type
/// - `SerializationError`: the response could not be serialized
/// - `UnknownOperation`: the operation name was not recognized
#[allow(clippy::unused_async)] // service_fn needs a future
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Diagnostic> {
    let (event_payload, context) = event.into_parts();

    let body = event_payload
        .get("body")
        .and_then(Value::as_str)
        .and_then(|body_str| serde_json::from_str::<Value>(body_str).ok());

    let (payload, user_trusted) = match body {
        Some(body) => (body, false),
        None => {
            let trusted = is_tool_call(&event_payload);
            (event_payload, trusted)
        }
    };

    let operation = extract_operation_name(&payload, &context);
    info!(
        api = %config().name,
        version = %config().version,
        operation = %operation,
        "Invoking operation"
    );

    route(&operation, payload, user_trusted)
}
