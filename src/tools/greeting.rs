use crate::models::greeting::{Greeting, SayHiAuthRequest, SayHiRequest, SayLongHiRequest};

/// Rendered in place of an email when the caller has no resolved identity
const NOT_AUTHENTICATED: &str = "not authenticated";

/// Rendered when a resolved user carries no email
const MISSING_EMAIL: &str = "null";

/// Greets `name`: `"Hi, <name>"`.
///
/// The name is not validated; an empty name yields `"Hi, "`.
#[must_use]
pub fn say_hi(request: &SayHiRequest) -> Greeting {
    Greeting {
        data: format!("Hi, {}", request.name),
    }
}

/// Greets `name` and reports who the caller is.
///
/// # Examples
///
/// Without a user: "Hi, You, you're not authenticated"
/// With a user: "Hi, You, you're jane@example.com"
/// With a user that has no email: "Hi, You, you're null"
#[must_use]
pub fn say_hi_auth(request: &SayHiAuthRequest) -> Greeting {
    let identity = request.user.as_ref().map_or(NOT_AUTHENTICATED, |user| {
        user.email.as_deref().unwrap_or(MISSING_EMAIL)
    });

    Greeting {
        data: format!("Hi, {}, you're {identity}", request.name),
    }
}

/// Greets by full name, optionally mentioning the weekday.
#[must_use]
pub fn say_long_hi(request: &SayLongHiRequest) -> Greeting {
    let mut data = format!("Hi, {}", request.first_name);
    if let Some(middle_name) = &request.middle_name {
        data.push(' ');
        data.push_str(middle_name);
    }
    data.push(' ');
    data.push_str(&request.last_name);
    data.push('.');

    // no separator after the period
    if let Some(weekday) = &request.request.weekday {
        data.push_str("It's ");
        data.push_str(weekday);
        data.push('.');
    }

    Greeting { data }
}
