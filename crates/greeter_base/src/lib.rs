/* 📖 # Why have greeter_base as a separate library?
greeter_base owns the error type and the tracing setup used by both the formatter and the CLI.
Keeping them here lets the CLI report formatter errors without depending on its internals.
*/

pub mod error;
pub mod tracing;

// Re-export commonly used types for convenience
pub use error::{ErrorKind, GreeterError, GreeterResult, ResultExt};
