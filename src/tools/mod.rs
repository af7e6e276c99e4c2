pub mod greeting;

pub use greeting::{say_hi, say_hi_auth, say_long_hi};
