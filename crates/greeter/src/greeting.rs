/* 📖 # Why is an empty name valid but a blank one is not?

The empty string means "no name given" and is greeted with the default subject.
A name made only of whitespace was given but carries nothing to greet, so it is
rejected with `ErrorKind::NameBlank`. Any other name is used exactly as passed in:
no trimming, no case changes, no escaping.
*/

use greeter_base::{ErrorKind, GreeterResult};
use tracing::debug;

/// Subject used when the name is the empty string.
pub const DEFAULT_SUBJECT: &str = "World";

/// Formats `"Hello, <name>!"`.
///
/// An empty `name` greets [`DEFAULT_SUBJECT`]. A non-empty name consisting only of
/// whitespace fails with [`ErrorKind::NameBlank`].
///
/// ```
/// use greeter::format_greeting;
///
/// assert_eq!(format_greeting("Go").unwrap(), "Hello, Go!");
/// assert_eq!(format_greeting("").unwrap(), "Hello, World!");
/// ```
///
/// ```
/// use greeter::{ErrorKind, format_greeting};
///
/// let err = format_greeting("\t\t").unwrap_err();
/// assert!(matches!(err.kind(), ErrorKind::NameBlank));
/// assert_eq!(err.to_string(), "name cannot be empty");
/// ```
pub fn format_greeting(name: &str) -> GreeterResult<String> {
    if is_blank(name) {
        debug!(len = name.len(), "rejecting blank name");
        return Err(ErrorKind::NameBlank.into());
    }
    let subject = if name.is_empty() {
        DEFAULT_SUBJECT
    } else {
        name
    };
    Ok(format!("Hello, {subject}!"))
}

/// Like [`format_greeting`] but panics if the name is blank.
///
/// Only for callers that have already ruled out blank input.
///
/// ```
/// assert_eq!(greeter::must_format_greeting("Go"), "Hello, Go!");
/// ```
///
/// ```should_panic
/// greeter::must_format_greeting("   ");
/// ```
pub fn must_format_greeting(name: &str) -> String {
    format_greeting(name).unwrap_or_else(|err| panic!("must_format_greeting failed: {err}"))
}

// Non-empty and whitespace only; the empty string is not blank.
fn is_blank(name: &str) -> bool {
    !name.is_empty() && name.chars().all(char::is_whitespace)
}
