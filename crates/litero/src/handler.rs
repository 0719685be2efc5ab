//! Route handlers and the positional parameters passed to them.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{Result, RouterError};
use crate::response::Response;

/// A boxed handler function.
pub type HandlerFn = Arc<dyn Fn(&Params) -> Response + Send + Sync>;

/// The unit of work bound to a route.
#[derive(Clone)]
pub enum Handler {
    /// A function called directly with the captured params.
    Direct(HandlerFn),
    /// An action on a controller resolved through a
    /// [`ControllerRegistry`](crate::ControllerRegistry).
    Delegated {
        /// Registered controller name.
        controller: String,
        /// Action name on that controller.
        action: String,
    },
    /// A handler reference without a `Controller@action` separator.
    ///
    /// Kept so dispatch can report it instead of silently doing nothing.
    Malformed(String),
}

impl Handler {
    /// Wraps a function as a direct handler.
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&Params) -> Response + Send + Sync + 'static,
    {
        Self::Direct(Arc::new(f))
    }

    /// Creates a delegated handler from its two parts.
    pub fn controller(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self::Delegated {
            controller: controller.into(),
            action: action.into(),
        }
    }

    /// Parses a `"Controller@action"` reference.
    ///
    /// The controller is everything before the first `@` and must not be
    /// empty; the action runs up to the next `@`, if any. Anything else
    /// becomes [`Handler::Malformed`].
    ///
    /// # Example
    ///
    /// ```
    /// use litero::Handler;
    ///
    /// assert_eq!(
    ///     Handler::parse("ExampleController@firstAction"),
    ///     Handler::controller("ExampleController", "firstAction")
    /// );
    /// assert!(Handler::parse("justAName").is_malformed());
    /// ```
    pub fn parse(reference: &str) -> Self {
        match reference.split_once('@') {
            Some((controller, rest)) if !controller.is_empty() => {
                let action = rest.split_once('@').map_or(rest, |(action, _)| action);
                Self::controller(controller, action)
            }
            _ => Self::Malformed(reference.to_string()),
        }
    }

    /// Returns true for a reference that cannot be dispatched.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

impl From<&str> for Handler {
    fn from(reference: &str) -> Self {
        Self::parse(reference)
    }
}

impl From<String> for Handler {
    fn from(reference: String) -> Self {
        Self::parse(&reference)
    }
}

impl From<HandlerFn> for Handler {
    fn from(f: HandlerFn) -> Self {
        Self::Direct(f)
    }
}

impl FromStr for Handler {
    type Err = RouterError;

    /// Strict variant of [`Handler::parse`] that rejects malformed references.
    fn from_str(s: &str) -> Result<Self> {
        match Self::parse(s) {
            Self::Malformed(raw) => Err(RouterError::MalformedHandler(raw)),
            handler => Ok(handler),
        }
    }
}

impl PartialEq for Handler {
    /// Direct handlers are equal when they share the same function.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Direct(a), Self::Direct(b)) => Arc::ptr_eq(a, b),
            (
                Self::Delegated {
                    controller: c1,
                    action: a1,
                },
                Self::Delegated {
                    controller: c2,
                    action: a2,
                },
            ) => c1 == c2 && a1 == a2,
            (Self::Malformed(a), Self::Malformed(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct(_) => f.write_str("Direct(<fn>)"),
            Self::Delegated { controller, action } => f
                .debug_struct("Delegated")
                .field("controller", controller)
                .field("action", action)
                .finish(),
            Self::Malformed(raw) => f.debug_tuple("Malformed").field(raw).finish(),
        }
    }
}

impl fmt::Display for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct(_) => f.write_str("<fn>"),
            Self::Delegated { controller, action } => write!(f, "{controller}@{action}"),
            Self::Malformed(raw) => f.write_str(raw),
        }
    }
}

/// Wildcard values captured from the request path, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: Vec<String>,
}

impl Params {
    /// Creates empty params.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value.
    pub fn push(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
    }

    /// Gets the value at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Gets the value at `index` or returns an error.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::MissingParam`] if nothing was captured there.
    pub fn require(&self, index: usize) -> Result<&str> {
        self.get(index).ok_or(RouterError::MissingParam(index))
    }

    /// Parses the value at `index` as a specific type.
    pub fn parse<T: FromStr>(&self, index: usize) -> Option<T> {
        self.get(index).and_then(|v| v.parse().ok())
    }

    /// Number of captured values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the values as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.values
    }

    /// Returns an iterator over the values.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for Params {
    fn from(values: Vec<String>) -> Self {
        Self { values }
    }
}

impl<S: Into<String>> FromIterator<S> for Params {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}
