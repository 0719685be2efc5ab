//! Main router implementation.

use tracing::{debug, trace, warn};

use crate::controller::ControllerRegistry;
use crate::error::{Result, RouterError};
use crate::handler::{Handler, Params};
use crate::path::PathPattern;
use crate::request::{RequestContext, DEFAULT_METHOD};
use crate::response::Response;

/// A single route definition.
#[derive(Debug, Clone)]
pub struct Route {
    /// Path pattern.
    pub pattern: PathPattern,
    /// Request handler.
    pub handler: Handler,
}

impl Route {
    /// Creates a new route.
    pub fn new(pattern: &str, handler: Handler) -> Self {
        Self {
            pattern: PathPattern::new(pattern),
            handler,
        }
    }
}

/// Routes one request.
///
/// A router holds the route table and the state of the request being
/// routed: its path and method, the handler resolved by
/// [`is_found`](Self::is_found) and the params captured from the path.
///
/// ```
/// use litero::{Handler, Response, Router};
///
/// let mut router = Router::new("/second/hello")
///     .add("/", Handler::func(|_| Response::text("home")))
///     .add("/second/:any", Handler::func(|p| {
///         Response::text(format!("got {}", p.get(0).unwrap_or_default()))
///     }));
///
/// assert!(router.is_found());
/// assert_eq!(router.params().as_slice(), ["hello"]);
///
/// let res = router.dispatch().unwrap();
/// assert_eq!(res.body_string(), Some("got hello".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct Router {
    /// Registered routes, in registration order.
    routes: Vec<Route>,
    /// Controllers available to delegated handlers.
    controllers: ControllerRegistry,
    request_uri: String,
    request_method: String,
    request_handler: Option<Handler>,
    params: Params,
}

impl Router {
    /// Creates a router for a `GET` request to `path`.
    ///
    /// The path is stored as given; use [`Router::from_request`] to strip
    /// the query string and decode it.
    pub fn new(path: impl Into<String>) -> Self {
        Self::with_method(path, DEFAULT_METHOD)
    }

    /// Creates a router for a request with an explicit method.
    pub fn with_method(path: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            routes: Vec::new(),
            controllers: ControllerRegistry::new(),
            request_uri: path.into(),
            request_method: method.into(),
            request_handler: None,
            params: Params::new(),
        }
    }

    /// Creates a router from the request metadata handed over by the server.
    ///
    /// Everything from the first `?` is dropped, the rest is
    /// percent-decoded, and the method defaults to `GET`.
    pub fn from_request(ctx: &RequestContext) -> Self {
        Self::with_method(ctx.path(), ctx.method_or_default())
    }

    /// Sets the controllers used to resolve `Controller@action` handlers.
    #[must_use]
    pub fn controllers(mut self, controllers: ControllerRegistry) -> Self {
        self.controllers = controllers;
        self
    }

    /// Adds a route.
    ///
    /// Registering a pattern that is already present replaces its handler
    /// and keeps its position in the table.
    #[must_use]
    pub fn add(mut self, pattern: &str, handler: impl Into<Handler>) -> Self {
        self.insert(pattern, handler.into());
        self
    }

    /// Adds several routes at once, in iteration order.
    ///
    /// ```
    /// use litero::Router;
    ///
    /// let router = Router::new("/first").add_routes([
    ///     ("/first", "ExampleController@firstAction"),
    ///     ("/second/:any", "ExampleController@secondAction"),
    /// ]);
    /// assert_eq!(router.routes().len(), 2);
    /// ```
    #[must_use]
    pub fn add_routes<I, P, H>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = (P, H)>,
        P: AsRef<str>,
        H: Into<Handler>,
    {
        for (pattern, handler) in routes {
            self.insert(pattern.as_ref(), handler.into());
        }
        self
    }

    fn insert(&mut self, pattern: &str, handler: Handler) {
        if handler.is_malformed() {
            warn!(pattern, handler = %handler, "handler reference has no Controller@action form");
        }

        match self
            .routes
            .iter_mut()
            .find(|route| route.pattern.pattern() == pattern)
        {
            Some(route) => {
                warn!(pattern, "route registered twice, replacing handler");
                route.handler = handler;
            }
            None => self.routes.push(Route::new(pattern, handler)),
        }
    }

    /// Returns the registered routes.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the request path being routed.
    pub fn request_uri(&self) -> &str {
        &self.request_uri
    }

    /// Returns the request method.
    pub fn request_method(&self) -> &str {
        &self.request_method
    }

    /// Returns the resolved handler, if any.
    pub fn request_handler(&self) -> Option<&Handler> {
        self.request_handler.as_ref()
    }

    /// Overrides the resolved handler.
    pub fn set_request_handler(&mut self, handler: impl Into<Handler>) {
        self.request_handler = Some(handler.into());
    }

    /// Returns the params captured by the last successful match.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Matches the request path against the route table.
    ///
    /// On success the matched handler and captured params become the
    /// router's resolved state. On failure that state is left untouched.
    pub fn is_found(&mut self) -> bool {
        let Some((handler, params)) = self
            .find_route()
            .map(|(route, params)| (route.handler.clone(), params))
        else {
            debug!(
                method = %self.request_method,
                path = %self.request_uri,
                "no route matched"
            );
            return false;
        };

        debug!(
            method = %self.request_method,
            path = %self.request_uri,
            handler = %handler,
            params = params.len(),
            "route matched"
        );
        self.request_handler = Some(handler);
        self.params = params;
        true
    }

    /// Finds the route for the request path without touching router state.
    ///
    /// An exact pattern match wins outright with no params. Otherwise the
    /// first route, in registration order, whose pattern matches the whole
    /// path is returned with its captures.
    pub fn find_route(&self) -> Option<(&Route, Params)> {
        let path = self.request_uri.as_str();

        if let Some(route) = self
            .routes
            .iter()
            .find(|route| route.pattern.pattern() == path)
        {
            return Some((route, Params::new()));
        }

        self.routes.iter().find_map(|route| {
            trace!(pattern = route.pattern.pattern(), path, "trying route");
            route.pattern.match_path(path).map(|params| (route, params))
        })
    }

    /// Runs a handler with the given params.
    ///
    /// With `None`, the handler resolved by [`is_found`](Self::is_found)
    /// (or set with [`set_request_handler`](Self::set_request_handler)) is
    /// used.
    ///
    /// # Errors
    ///
    /// - [`RouterError::InvalidArgument`] if there is no handler to run.
    /// - [`RouterError::ControllerNotFound`] or [`RouterError::MethodNotFound`]
    ///   if a delegated handler cannot be resolved.
    /// - [`RouterError::MalformedHandler`] for a reference without
    ///   `Controller@action` form.
    pub fn execute_handler(&self, handler: Option<&Handler>, params: &Params) -> Result<Response> {
        let handler = handler
            .or(self.request_handler.as_ref())
            .ok_or(RouterError::InvalidArgument)?;

        match handler {
            Handler::Direct(f) => Ok(f(params)),
            Handler::Delegated { controller, action } => {
                self.controllers.invoke(controller, action, params)
            }
            Handler::Malformed(raw) => Err(RouterError::MalformedHandler(raw.clone())),
        }
    }

    /// Runs the resolved handler with the captured params.
    ///
    /// # Errors
    ///
    /// Same as [`execute_handler`](Self::execute_handler).
    pub fn dispatch(&self) -> Result<Response> {
        self.execute_handler(None, &self.params)
    }

    /// Matches the request and runs the resolved handler, or `fallback`
    /// with no params when nothing matches.
    ///
    /// # Errors
    ///
    /// Same as [`execute_handler`](Self::execute_handler).
    pub fn run(&mut self, fallback: &Handler) -> Result<Response> {
        if self.is_found() {
            self.dispatch()
        } else {
            self.execute_handler(Some(fallback), &Params::new())
        }
    }
}
