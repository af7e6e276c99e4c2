pub mod error;
pub mod greeting;
pub mod interceptor;
pub mod user;

pub use error::AppError;
pub use greeting::*;
pub use interceptor::*;
pub use user::AuthenticatedUser;
