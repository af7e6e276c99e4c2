//! Catalogue of the operations exposed by the API.

use serde_json::Value;

use crate::models::{SayHiAuthRequest, SayHiRequest, SayLongHiRequest};
use crate::schema::generate_gateway_schema;

pub const SAY_HI: &str = "sayHi";
pub const SAY_HI_AUTH: &str = "sayHiAuth";
pub const SAY_LONG_HI: &str = "sayLongHi";

#[derive(Debug, Clone, Copy)]
pub struct Operation {
    pub name: &'static str,
    pub description: &'static str,
    /// The interceptor injects the caller identity into the arguments.
    pub injects_user: bool,
    /// Published schema of the arguments the client sends.
    pub input_schema: fn() -> Value,
}

pub const OPERATIONS: &[Operation] = &[
    Operation {
        name: SAY_HI,
        description: "Greet a person by name. Returns \"Hi, <name>\" in the data field.",
        injects_user: false,
        input_schema: generate_gateway_schema::<SayHiRequest>,
    },
    Operation {
        name: SAY_HI_AUTH,
        description: "Greet a person by name and report the caller's identity: the email of \
                      the authenticated user, or \"not authenticated\" when the request \
                      carries no valid token.",
        injects_user: true,
        input_schema: generate_gateway_schema::<SayHiAuthRequest>,
    },
    Operation {
        name: SAY_LONG_HI,
        description: "Greet a person by full name (first, optional middle, last). When a \
                      weekday is given it is mentioned after the name.",
        injects_user: false,
        input_schema: generate_gateway_schema::<SayLongHiRequest>,
    },
];

/// Looks up an operation by its exposed name.
#[must_use]
pub fn find_operation(name: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().find(|op| op.name == name)
}
