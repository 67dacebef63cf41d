use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;

use tracing_error::{SpanTrace, SpanTraceStatus};

/* 📖 # Why a custom error type and not use anyhow/eyre/thiserror etc?

- The formatter has exactly one failure mode, callers need to match on it
- Context and span traces are attached the same way in every crate
- No extra dependencies beyond tracing-error
 */

/// Error variants that can occur in greeter operations.
/// Each variant represents a specific error category with its associated context.
#[derive(Debug)]
pub enum ErrorKind {
    /// The name was non-empty but consisted only of whitespace
    NameBlank,

    /// File system operation failed
    FileError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A configuration file could not be parsed
    ConfigError { path: PathBuf, message: String },

    /// Catch-all for other errors with a message
    Message { message: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NameBlank => write!(f, "name cannot be empty"),
            ErrorKind::FileError { path, source } => {
                write!(f, "File error at {}: {}", path.display(), source)
            }
            ErrorKind::ConfigError { path, message } => {
                write!(f, "Invalid config at {}: {}", path.display(), message)
            }
            ErrorKind::Message { message } => write!(f, "{}", message),
        }
    }
}

/* 📖 # Why separate ErrorKind and GreeterError?
ErrorKind is what callers match on. GreeterError carries everything that is only
interesting when reporting: context strings, an optional cause and the span trace
captured where the error was created.
*/

/// Error type wrapping an [`ErrorKind`] with context, cause and span trace.
pub struct GreeterError {
    kind: ErrorKind,
    context: Vec<String>,
    cause: Option<Box<GreeterError>>,
    span_trace: SpanTrace,
}

impl GreeterError {
    /// Creates a new error from an ErrorKind, capturing the current span trace.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: vec![],
            cause: None,
            span_trace: SpanTrace::capture(),
        }
    }

    /// Shorthand for an [`ErrorKind::Message`] error.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Message {
            message: message.into(),
        })
    }

    /// Attaches context to an error.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Attaches context using lazy evaluation.
    pub fn with_context<F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> String,
    {
        self.context.push(f());
        self
    }

    /// Records the error that led to this one.
    pub fn caused_by(mut self, cause: impl Into<Box<GreeterError>>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Returns a reference to the underlying ErrorKind.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn get_context(&self) -> &[String] {
        &self.context
    }

    pub fn cause(&self) -> Option<&GreeterError> {
        self.cause.as_deref()
    }

    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// Returns the innermost error in the source chain.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut current: &(dyn StdError + 'static) = self;
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }

    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: &str) -> fmt::Result {
        writeln!(f, "{}", self.kind)?;
        let child_count = self.context.len() + usize::from(self.cause.is_some());
        for (index, context) in self.context.iter().enumerate() {
            let branch = if index + 1 == child_count { "└─" } else { "├─" };
            writeln!(f, "{indent}{branch} {context}")?;
        }
        if let Some(cause) = &self.cause {
            write!(f, "{indent}└─ cause: ")?;
            cause.fmt_tree(f, &format!("{indent}   "))?;
        }
        Ok(())
    }
}

impl From<ErrorKind> for GreeterError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<ErrorKind> for Box<GreeterError> {
    fn from(kind: ErrorKind) -> Self {
        Box::new(GreeterError::new(kind))
    }
}

impl StdError for GreeterError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match (&self.kind, &self.cause) {
            (ErrorKind::FileError { source, .. }, _) => Some(source),
            (_, Some(cause)) => Some(cause.as_ref()),
            _ => None,
        }
    }
}

impl fmt::Display for GreeterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ctx in &self.context {
            write!(f, "{}: ", ctx)?;
        }
        write!(f, "{}", self.kind)
    }
}

impl fmt::Debug for GreeterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, "")?;
        if self.span_trace.status() == SpanTraceStatus::CAPTURED {
            writeln!(f, "Trace: {}", self.span_trace)?;
        }
        Ok(())
    }
}

/* 📖 # Why use Box<GreeterError> in the result type?

GreeterError carries a span trace and context vector. Boxing keeps the Ok path of
`format_greeting` as small as a String plus a pointer.

*/

/// Standard result type for greeter operations.
pub type GreeterResult<T> = std::result::Result<T, Box<GreeterError>>;

/// Extension trait for attaching context to Results.
pub trait ResultExt<T> {
    /// Attaches context to an error, consuming and re-wrapping it.
    fn context(self, context: impl Into<String>) -> GreeterResult<T>;

    /// Attaches context using lazy evaluation.
    /// Context is only evaluated if the result is an error.
    fn with_context<F>(self, f: F) -> GreeterResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for GreeterResult<T> {
    fn context(self, context: impl Into<String>) -> GreeterResult<T> {
        self.map_err(|err| Box::new((*err).context(context)))
    }

    fn with_context<F>(self, f: F) -> GreeterResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| Box::new((*err).with_context(f)))
    }
}
