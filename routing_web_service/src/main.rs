//! The "Routing Validation Web Service's" entry point.

use routing_common::directory::BankDirectory;
use routing_web_service::config::ServiceConfig;
use routing_web_service::loading::spawn_loader;
use routing_web_service::routes;
use std::env;
use std::sync::Arc;
use warp::Filter;

/// The "Routing Validation Web Service's" entry point.
#[tokio::main]
async fn main() {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "routing=info");
    }
    pretty_env_logger::init();

    let log = warp::log("routing");

    let config = ServiceConfig::from_env();

    let directory = Arc::new(BankDirectory::new());
    // Not awaited: requests are served while the table loads.
    let _loader = spawn_loader(config.csv_path.clone(), directory.clone());

    let api = routes::api(directory);

    log::info!("Listening on http://{}", config.addr);

    // Start up the server
    match config.static_dir {
        Some(static_dir) => {
            log::info!("Serving static files from: {}", static_dir.display());
            let routes = api.or(warp::fs::dir(static_dir)).with(log);
            warp::serve(routes).run(config.addr).await;
        }
        None => {
            let routes = api.with(log);
            warp::serve(routes).run(config.addr).await;
        }
    }
}
