//! Error types for routing and dispatch.

use thiserror::Error;

/// Router-specific errors.
#[derive(Debug, Error)]
pub enum RouterError {
    /// No handler was supplied and none was resolved by a match.
    #[error("request handler not set, check Router::is_found() first")]
    InvalidArgument,

    /// The controller named by a delegated handler is not registered.
    #[error("Controller class '{0}' not found")]
    ControllerNotFound(String),

    /// The controller exists but has no action with this name.
    #[error("Method '{controller}::{action}' not found")]
    MethodNotFound { controller: String, action: String },

    /// A handler string without a usable `Controller@action` separator.
    #[error("malformed handler reference: {0:?}")]
    MalformedHandler(String),

    /// A positional parameter was required but not captured.
    #[error("missing path parameter at position {0}")]
    MissingParam(usize),
}

/// Result type alias for router operations.
pub type Result<T> = std::result::Result<T, RouterError>;
