//! litero example application
//!
//! Routes a single request, given on the command line or through the
//! CGI-style `REQUEST_URI` / `REQUEST_METHOD` variables, and prints the
//! response.

use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use litero::{Controller, ControllerRegistry, Handler, Params, RequestContext, Response, Router};

/// Extra light request router for small web applications.
#[derive(Parser)]
#[command(name = "litero")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Request URI, query string included.
    #[arg(short, long, env = "REQUEST_URI", default_value = "/")]
    uri: String,

    /// Request method.
    #[arg(short, long, env = "REQUEST_METHOD", default_value = "GET")]
    method: String,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Default)]
struct ExampleController;

impl ExampleController {
    fn first_action(&self, _params: &Params) -> Response {
        Response::text("Hello from ExampleController::firstAction!")
    }

    fn second_action(&self, params: &Params) -> Response {
        Response::text(format!(
            "Hello from ExampleController::secondAction( \"{}\" )!",
            params.get(0).unwrap_or_default()
        ))
    }

    fn page_action(&self, params: &Params) -> Response {
        match params.parse::<u64>(0) {
            Some(page) => Response::json(&serde_json::json!({ "page": page })),
            None => Response::new(400).body("page number out of range"),
        }
    }
}

fn controllers() -> ControllerRegistry {
    ControllerRegistry::new().register(
        Controller::<ExampleController>::new("ExampleController")
            .action("firstAction", ExampleController::first_action)
            .action("secondAction", ExampleController::second_action)
            .action("pageAction", ExampleController::page_action),
    )
}

/// Builds the example application's router for one request.
fn app(ctx: &RequestContext) -> Router {
    Router::from_request(ctx)
        .controllers(controllers())
        .add("/", Handler::func(|_| Response::text("Hello from Litero!")))
        .add_routes([
            ("/first", "ExampleController@firstAction"),
            ("/second/:any", "ExampleController@secondAction"),
            ("/page/:num", "ExampleController@pageAction"),
        ])
}

fn not_found() -> Handler {
    Handler::func(|_| Response::not_found().body("404 Not found"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let ctx = RequestContext::new(cli.uri).method(cli.method);
    debug!(uri = %ctx.uri, method = ctx.method_or_default(), "routing request");

    let response = app(&ctx).run(&not_found())?;

    println!("{} {}", response.status, response.status_text());
    let mut headers: Vec<_> = response.headers.iter().collect();
    headers.sort();
    for (key, value) in headers {
        println!("{key}: {value}");
    }
    println!();
    println!("{}", String::from_utf8_lossy(&response.body));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get(uri: &str) -> Response {
        app(&RequestContext::new(uri))
            .run(&not_found())
            .unwrap_or_else(|e| panic!("Failed to route {uri}: {e}"))
    }

    #[test]
    fn test_home() {
        assert_eq!(get("/").body_string(), Some("Hello from Litero!".to_string()));
    }

    #[test]
    fn test_first_action() {
        let res = get("/first?utm=x");
        assert_eq!(res.status, 200);
        assert_eq!(
            res.body_string(),
            Some("Hello from ExampleController::firstAction!".to_string())
        );
    }

    #[test]
    fn test_second_action_spans_segments() {
        let res = get("/second/a/b");
        assert_eq!(
            res.body_string(),
            Some("Hello from ExampleController::secondAction( \"a/b\" )!".to_string())
        );
    }

    #[test]
    fn test_page_action() {
        assert_eq!(get("/page/3").body_string(), Some(r#"{"page":3}"#.to_string()));
        assert_eq!(get("/page/99999999999999999999999").status, 400);
    }

    #[test]
    fn test_not_found() {
        let res = get("/missing");
        assert_eq!(res.status, 404);
        assert_eq!(res.body_string(), Some("404 Not found".to_string()));
    }
}
