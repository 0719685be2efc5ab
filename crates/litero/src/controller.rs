//! Controller registry for `Controller@action` handlers.
//!
//! Each controller type is registered under a name together with a factory
//! and a table of actions. Dispatching a delegated handler looks the name
//! up, builds a fresh instance and calls the action on it.
//!
//! ```
//! use litero::{Controller, ControllerRegistry, Params, Response};
//!
//! #[derive(Default)]
//! struct Pages;
//!
//! impl Pages {
//!     fn show(&self, params: &Params) -> Response {
//!         Response::text(format!("page {}", params.get(0).unwrap_or("?")))
//!     }
//! }
//!
//! let registry = ControllerRegistry::new()
//!     .register(Controller::<Pages>::new("Pages").action("show", Pages::show));
//!
//! let res = registry.invoke("Pages", "show", &["7"].into_iter().collect()).unwrap();
//! assert_eq!(res.body_string(), Some("page 7".to_string()));
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{Result, RouterError};
use crate::handler::Params;
use crate::response::Response;

/// An action bound to a controller type.
pub type Action<C> = Arc<dyn Fn(&C, &Params) -> Response + Send + Sync>;

/// A controller type, its factory and its actions.
pub struct Controller<C> {
    name: String,
    factory: Arc<dyn Fn() -> C + Send + Sync>,
    actions: HashMap<String, Action<C>>,
}

impl<C: Default + 'static> Controller<C> {
    /// Describes a controller built with `C::default()`.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_factory(name, C::default)
    }
}

impl<C: 'static> Controller<C> {
    /// Describes a controller built by `factory`.
    pub fn with_factory<F>(name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> C + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            factory: Arc::new(factory),
            actions: HashMap::new(),
        }
    }

    /// Adds an action.
    #[must_use]
    pub fn action<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&C, &Params) -> Response + Send + Sync + 'static,
    {
        self.actions.insert(name.into(), Arc::new(f));
        self
    }

    /// Returns the controller name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Type-erased view of a [`Controller`].
trait ErasedController: Send + Sync {
    fn has_action(&self, action: &str) -> bool;

    fn invoke(&self, action: &str, params: &Params) -> Option<Response>;
}

impl<C: 'static> ErasedController for Controller<C> {
    fn has_action(&self, action: &str) -> bool {
        self.actions.contains_key(action)
    }

    fn invoke(&self, action: &str, params: &Params) -> Option<Response> {
        let instance = (self.factory)();
        let action = self.actions.get(action)?;
        Some(action(&instance, params))
    }
}

/// Maps controller names to their registered controllers.
#[derive(Clone, Default)]
pub struct ControllerRegistry {
    controllers: HashMap<String, Arc<dyn ErasedController>>,
}

impl ControllerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a controller, replacing any previous one with the same name.
    #[must_use]
    pub fn register<C: 'static>(mut self, controller: Controller<C>) -> Self {
        let name = controller.name.clone();
        if self
            .controllers
            .insert(name.clone(), Arc::new(controller))
            .is_some()
        {
            warn!(controller = %name, "controller registered twice, replacing");
        }
        self
    }

    /// Returns true if a controller with this name is registered.
    pub fn contains(&self, controller: &str) -> bool {
        self.controllers.contains_key(controller)
    }

    /// Instantiates `controller` and calls `action` on it.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::ControllerNotFound`] if no controller has that
    /// name and [`RouterError::MethodNotFound`] if it has no such action.
    pub fn invoke(&self, controller: &str, action: &str, params: &Params) -> Result<Response> {
        let entry = self
            .controllers
            .get(controller)
            .ok_or_else(|| RouterError::ControllerNotFound(controller.to_string()))?;

        let method_not_found = || RouterError::MethodNotFound {
            controller: controller.to_string(),
            action: action.to_string(),
        };

        if !entry.has_action(action) {
            return Err(method_not_found());
        }

        debug!(controller, action, params = params.len(), "invoking controller action");
        entry.invoke(action, params).ok_or_else(method_not_found)
    }
}

impl std::fmt::Debug for ControllerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.controllers.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ControllerRegistry")
            .field("controllers", &names)
            .finish()
    }
}
