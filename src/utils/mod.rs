//! Utility functions shared across the application.
//!
//! Both the API Lambda and the interceptor need to turn whatever name the
//! gateway forwards into the bare operation name.

/// Strips the gateway target prefix from an operation name.
///
/// Format: `gateway-target-id___sayHi` → `sayHi`
#[must_use]
pub fn strip_gateway_prefix(name: &str) -> String {
    name.split_once("___").map_or_else(
        || name.to_string(),
        |(_, actual_name)| actual_name.to_string(),
    )
}

/// Strips the API namespace used by JSON-RPC style method names.
///
/// Format: `example.sayHi` → `sayHi`. Names in another namespace are kept as is.
#[must_use]
pub fn strip_api_namespace(name: &str, api_name: &str) -> String {
    name.strip_prefix(api_name)
        .and_then(|rest| rest.strip_prefix('.'))
        .unwrap_or(name)
        .to_string()
}

/// Reduces a forwarded name to the bare operation name.
#[must_use]
pub fn normalize_operation_name(name: &str, api_name: &str) -> String {
    strip_api_namespace(&strip_gateway_prefix(name), api_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_gateway_prefix() {
        assert_eq!(strip_gateway_prefix("sayHi"), "sayHi");
        assert_eq!(strip_gateway_prefix("gateway-123___sayHi"), "sayHi");
        assert_eq!(strip_gateway_prefix("a___b___sayHi"), "b___sayHi");
    }

    #[test]
    fn test_strip_api_namespace() {
        assert_eq!(strip_api_namespace("example.sayHi", "example"), "sayHi");
        assert_eq!(strip_api_namespace("other.sayHi", "example"), "other.sayHi");
        assert_eq!(strip_api_namespace("exampleSayHi", "example"), "exampleSayHi");
    }

    #[test]
    fn test_normalize_operation_name() {
        assert_eq!(
            normalize_operation_name("target___example.sayLongHi", "example"),
            "sayLongHi"
        );
    }
}
