//! Example greeting API served from AWS Lambda.
//!
//! The API Lambda ([`handler`]) routes named operations to the greeting
//! handlers in [`tools`]. The interceptor Lambda ([`interceptor`]) sits in
//! front of it and injects the caller identity for operations that take one.

pub mod config;
pub mod handler;
pub mod interceptor;
pub mod models;
pub mod operations;
pub mod schema;
pub mod tools;
pub mod utils;
