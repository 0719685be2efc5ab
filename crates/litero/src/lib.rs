//! # litero
//!
//! An extra light request router for small web applications.
//!
//! This crate provides:
//! - Exact and wildcard route patterns, matched in registration order
//! - Positional params captured from wildcard segments
//! - Handlers that are either functions or `Controller@action` references
//!   resolved through a [`ControllerRegistry`]
//!
//! ## Quick Start
//!
//! ```
//! use litero::{Handler, RequestContext, Response, Router};
//!
//! let ctx = RequestContext::new("/page/42?ref=home").method("GET");
//!
//! let mut router = Router::from_request(&ctx)
//!     .add("/", Handler::func(|_| Response::text("Hello from Litero!")))
//!     .add("/page/:num", Handler::func(|params| {
//!         Response::text(format!("page {}", params.get(0).unwrap_or_default()))
//!     }));
//!
//! let not_found = Handler::func(|_| Response::not_found().body("404 Not found"));
//! let res = router.run(&not_found).unwrap();
//! assert_eq!(res.body_string(), Some("page 42".to_string()));
//! ```
//!
//! ## Wildcards
//!
//! - `/page/:seg` - one segment, like `/page/qwerty` or `/page/123`
//! - `/page/:num` - digits only, like `/page/123`
//! - `/page/:any` - anything, like `/page/qwerty` or `/page/qwerty/123`
//!
//! Everything else in a pattern is matched as a regular expression against
//! the whole path. A path equal to a registered pattern always matches that
//! route first, with no params.
//!
//! ## Controllers
//!
//! ```
//! use litero::{Controller, ControllerRegistry, Params, Response, Router};
//!
//! #[derive(Default)]
//! struct ExampleController;
//!
//! impl ExampleController {
//!     fn second_action(&self, params: &Params) -> Response {
//!         Response::text(format!("second {}", params.get(0).unwrap_or_default()))
//!     }
//! }
//!
//! let controllers = ControllerRegistry::new().register(
//!     Controller::<ExampleController>::new("ExampleController")
//!         .action("secondAction", ExampleController::second_action),
//! );
//!
//! let mut router = Router::new("/second/hello")
//!     .controllers(controllers)
//!     .add("/second/:any", "ExampleController@secondAction");
//!
//! assert!(router.is_found());
//! let res = router.dispatch().unwrap();
//! assert_eq!(res.body_string(), Some("second hello".to_string()));
//! ```

mod controller;
mod error;
mod handler;
mod path;
mod request;
mod response;
mod router;

pub use controller::{Action, Controller, ControllerRegistry};
pub use error::{Result, RouterError};
pub use handler::{Handler, HandlerFn, Params};
pub use path::{translate, PathPattern, WILDCARDS};
pub use request::{raw_url_decode, RequestContext, DEFAULT_METHOD};
pub use response::Response;
pub use router::{Route, Router};
