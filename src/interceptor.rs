//! Gateway request interception.
//!
//! The interceptor runs in front of the API Lambda. It removes any identity
//! the client tried to pass in the arguments and, for tool calls to operations
//! that take a user, injects the identity carried by the bearer token.

use anyhow::{Context, Result, bail};
use chrono::Utc;
use jsonwebtoken::dangerous::insecure_decode;
use lambda_runtime::tracing::{debug, info, warn};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::collections::HashMap;

use crate::config::ApiConfig;
use crate::models::{AuthenticatedUser, InterceptorEvent, InterceptorResponse};
use crate::operations::find_operation;
use crate::utils::normalize_operation_name;

/// Argument under which the resolved identity is injected
pub const USER_ARGUMENT: &str = "user";

const AUTH_HEADER: &str = "authorization";
const BEARER_SCHEME: &str = "bearer";

/// JWT claims needed to resolve the caller.
#[derive(Debug, Deserialize)]
struct Claims {
    exp: Option<i64>,
    sub: Option<String>,
    email: Option<String>,
    azp: Option<String>,
    aud: Option<Audience>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Audience {
    One(String),
    Many(Vec<String>),
}

impl Claims {
    fn client_ids(&self) -> impl Iterator<Item = &str> {
        let audiences: &[String] = match &self.aud {
            Some(Audience::One(aud)) => std::slice::from_ref(aud),
            Some(Audience::Many(auds)) => auds,
            None => &[],
        };
        self.azp
            .as_deref()
            .into_iter()
            .chain(audiences.iter().map(String::as_str))
    }
}

/// Extracts the bearer token from headers.
///
/// Both the header name and the `Bearer` scheme are matched case-insensitively.
/// A value without a scheme is taken as the token itself.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn extract_auth_token(headers: &HashMap<String, String>) -> Option<&str> {
    let value = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(AUTH_HEADER))
        .map(|(_, v)| v.trim())?;

    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case(BEARER_SCHEME) => {
            Some(token.trim_start())
        }
        _ => Some(value),
    }
}

/// Resolves the caller identity from a JWT.
///
/// The signature is not verified here: the gateway authorizer has already
/// validated the token before the interceptor runs.
///
/// # Errors
///
/// Returns an error if the token cannot be decoded, is expired, was issued to
/// a client outside the allow-list, or carries no email claim.
pub fn resolve_user(token: &str, config: &ApiConfig) -> Result<AuthenticatedUser> {
    resolve_user_at(token, config, Utc::now().timestamp())
}

fn resolve_user_at(token: &str, config: &ApiConfig, now: i64) -> Result<AuthenticatedUser> {
    let claims = insecure_decode::<Claims>(token)
        .map(|data| data.claims)
        .context("Failed to decode bearer token")?;

    if let Some(exp) = claims.exp
        && exp < now
    {
        bail!("Token expired at {exp}");
    }

    if !config.allowed_client_ids.is_empty()
        && !claims.client_ids().any(|id| config.allows_client(id))
    {
        bail!("Token was not issued to an allowed client");
    }

    let email = claims.email.context("Token carries no email claim")?;

    Ok(AuthenticatedUser {
        email: Some(email),
        user_id: claims.sub,
    })
}

fn is_tool_call(body: &Value) -> bool {
    body.get("method").is_some_and(|m| m == "tools/call")
}

fn operation_name(body: &Value, config: &ApiConfig) -> Option<String> {
    body.get("params")
        .and_then(|params| params.get("name"))
        .and_then(Value::as_str)
        .map(|name| normalize_operation_name(name, &config.name))
}

/// Arguments object of a tool call, created when the client sent none.
fn arguments_mut(body: &mut Value) -> Option<&mut Map<String, Value>> {
    body.get_mut("params")?
        .as_object_mut()?
        .entry("arguments")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
}

/// Removes a `user` the client placed in JSON-RPC `params` or at the top level.
fn strip_forwarded_user(body: &mut Value) {
    let params_user = body
        .get_mut("params")
        .and_then(Value::as_object_mut)
        .and_then(|params| params.remove(USER_ARGUMENT));
    let top_level_user = body
        .as_object_mut()
        .and_then(|obj| obj.remove(USER_ARGUMENT));

    if params_user.is_some() || top_level_user.is_some() {
        warn!(message = "Dropped client-supplied user from forwarded request");
    }
}

/// Rewrites a gateway request before it reaches the API Lambda.
///
/// A client-supplied `user` is dropped from every request. Tool calls to
/// operations that take a user get the identity resolved from the bearer
/// token, if any. Nothing else is changed.
#[must_use]
pub fn process_interceptor_event(
    event: InterceptorEvent,
    config: &ApiConfig,
) -> InterceptorResponse {
    let mut gateway_request = event.mcp.gateway_request;

    if !gateway_request.body.as_ref().is_some_and(is_tool_call) {
        debug!(message = "Forwarding non-tool request");
        if let Some(body) = gateway_request.body.as_mut() {
            strip_forwarded_user(body);
        }
        return InterceptorResponse::forward(gateway_request);
    }

    let operation = gateway_request
        .body
        .as_ref()
        .and_then(|body| operation_name(body, config));
    let injects_user = operation
        .as_deref()
        .and_then(find_operation)
        .is_some_and(|op| op.injects_user);

    let user = if injects_user {
        authenticate(gateway_request.headers.as_ref(), config)
    } else {
        None
    };

    if let Some(arguments) = gateway_request.body.as_mut().and_then(arguments_mut) {
        if arguments.remove(USER_ARGUMENT).is_some() {
            warn!(operation = ?operation, "Dropped client-supplied user argument");
        }
        if let Some(user) = user {
            info!(operation = ?operation, "Injecting user into arguments");
            arguments.insert(USER_ARGUMENT.to_string(), json!(user));
        }
    }

    InterceptorResponse::forward(gateway_request)
}

#[allow(clippy::implicit_hasher)]
fn authenticate(
    headers: Option<&HashMap<String, String>>,
    config: &ApiConfig,
) -> Option<AuthenticatedUser> {
    let Some(token) = headers.and_then(extract_auth_token) else {
        debug!(message = "No bearer token, caller is not authenticated");
        return None;
    };

    resolve_user(token, config)
        .inspect_err(|e| warn!(error = %format!("{e:#}"), "Could not resolve user from token"))
        .ok()
}

/// Parses a raw gateway event and rewrites it.
///
/// # Errors
///
/// Returns an error if the payload is not an interceptor event.
pub fn handle_interceptor_payload(
    payload: Value,
    config: &ApiConfig,
) -> Result<InterceptorResponse> {
    let event: InterceptorEvent =
        serde_json::from_value(payload).context("Failed to parse interceptor event")?;
    debug!(
        version = %event.interceptor_input_version,
        has_body = event.mcp.gateway_request.body.is_some(),
        "Parsed interceptor event"
    );
    Ok(process_interceptor_event(event, config))
}
