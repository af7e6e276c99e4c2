use lambda_runtime::{
    Error, LambdaEvent, service_fn,
    tracing::info,
};
use serde_json::Value;
use strawberry_example_api::config::config;
use strawberry_example_api::interceptor::handle_interceptor_payload;
use strawberry_example_api::models::InterceptorResponse;

/// Handles interceptor events from the gateway.
///
/// Client-supplied `user` values are dropped; tool calls that take a user get
/// the identity resolved from the bearer token. The payload is never logged
/// because its headers carry the token.
#[allow(clippy::unused_async)] // service_fn needs a future
async fn interceptor_handler(event: LambdaEvent<Value>) -> Result<InterceptorResponse, Error> {
    info!(request_id = %event.context.request_id, "Interceptor handler invoked");
    Ok(handle_interceptor_payload(event.payload, config())?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::tracing::init_default_subscriber();
    lambda_runtime::run(service_fn(interceptor_handler)).await
}
