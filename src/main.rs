use dotenv::dotenv;
use log::{info, warn};
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use warp::Filter;

mod handlers;
mod models;
mod routes;
mod services;

use services::alphavantage::AlphaVantage;
use services::cache::CachedFetcher;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // Initialize the logger
    env_logger::init();
    info!("Logger initialized. Starting the application...");

    let port_str = env::var("PORT").unwrap_or_else(|_| {
        warn!("$PORT not set, defaulting to 3030");
        "3030".to_string()
    });
    let port: u16 = port_str.parse().expect("PORT must be a number");
    info!("Using PORT: {}", port);

    // The key is passed through as-is; a missing key is rejected by the
    // remote service, not here.
    let api_key = env::var("ALPHAVANTAGE_API_KEY").unwrap_or_else(|_| {
        warn!("$ALPHAVANTAGE_API_KEY not set, remote calls will be unauthorized");
        String::new()
    });

    let source = Arc::new(AlphaVantage::new(api_key));
    let cache = Arc::new(CachedFetcher::new(source));

    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    info!("Will bind to: {}", addr);

    // Set up CORS
    let cors = warp::cors()
        .allow_any_origin()
        .allow_header("content-type")
        .allow_methods(vec!["GET"]);

    let api = routes::routes(cache).with(cors);
    info!("Routes configured successfully with CORS.");

    info!("Starting server on {}", addr);
    warp::serve(api).run(addr).await;
}
