//! Resolution errors.

/// Error reported by a failing style handler.
///
/// Handlers are otherwise pure; this is the only failure channel they have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerError {
    message: String,
}

impl HandlerError {
    /// Creates a handler error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for HandlerError {}

/// Error returned when style resolution fails.
///
/// The engine performs no error suppression around handler invocation: if
/// any handler fails, the whole `resolve` call fails and nothing is cached
/// for that token sequence. Unknown tokens are not errors; they are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A handler failed while processing a token.
    Handler {
        /// The token whose handler failed.
        token: String,
        /// The handler's error.
        source: HandlerError,
    },
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::Handler { token, source } => {
                write!(f, "handler for token '{}' failed: {}", token, source)
            }
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResolveError::Handler { source, .. } => Some(source),
        }
    }
}
