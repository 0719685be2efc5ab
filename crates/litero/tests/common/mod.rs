#![allow(dead_code)]

use litero::{Controller, ControllerRegistry, Handler, Params, Response, Router};

/// Handler answering with a fixed body.
pub fn text(body: &'static str) -> Handler {
    Handler::func(move |_| Response::text(body))
}

/// Handler answering with its params joined by `|`.
pub fn echo() -> Handler {
    Handler::func(|params| Response::text(params.iter().collect::<Vec<_>>().join("|")))
}

/// Runs the resolved handler and returns the body.
pub fn body_of(router: &Router) -> String {
    router
        .dispatch()
        .unwrap_or_else(|e| panic!("Failed to dispatch {}: {e}", router.request_uri()))
        .body_string()
        .expect("body is not UTF-8")
}

#[derive(Default)]
pub struct ArticleController {
    prefix: &'static str,
}

impl ArticleController {
    pub fn index(&self, _params: &Params) -> Response {
        Response::text(format!("{}index", self.prefix))
    }

    pub fn show(&self, params: &Params) -> Response {
        match params.parse::<u32>(0) {
            Some(id) => Response::text(format!("{}article {id}", self.prefix)),
            None => Response::new(400),
        }
    }

    pub fn archive(&self, params: &Params) -> Response {
        Response::text(format!(
            "{}archive {}/{}",
            self.prefix,
            params.get(0).unwrap_or_default(),
            params.get(1).unwrap_or_default()
        ))
    }
}

pub fn controllers() -> ControllerRegistry {
    ControllerRegistry::new().register(
        Controller::with_factory("ArticleController", || ArticleController { prefix: "> " })
            .action("index", ArticleController::index)
            .action("show", ArticleController::show)
            .action("archive", ArticleController::archive),
    )
}
