pub mod greeting;

pub use greeter_base::{ErrorKind, GreeterError, GreeterResult};
pub use greeting::{DEFAULT_SUBJECT, format_greeting, must_format_greeting};
