mod aggregator;
mod cache;
mod config;
mod errors;
mod models;
mod routes;
mod utils;

use actix_cors::Cors;
use actix_web::{get, web::Data, App, HttpResponse, HttpServer, Responder};
use dotenv::dotenv;
use tracing::info;

use cache::RedisCache;
use config::Config;
use utils::alphavantage::AlphaVantage;

#[get("/")]
async fn home() -> impl Responder {
    HttpResponse::Ok().body("Stock Data Server")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stock_data_fetcher=info".into()),
        )
        .init();

    info!("Starting server...");
    let config = Config::from_env();

    let cache = RedisCache::init(&config.redis_url)
        .await
        .expect("Error connecting to Redis");
    let upstream = AlphaVantage::init(&config.upstream_base_url)
        .expect("Failed to build upstream client");

    let config_data = Data::new(config);
    let cache_data = Data::new(cache);
    let upstream_data = Data::new(upstream);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(config_data.clone())
            .app_data(cache_data.clone())
            .app_data(upstream_data.clone())
            .wrap(Cors::permissive())
            .service(home)
            .configure(routes::stock::init)
    })
    .bind(("0.0.0.0", 8080))
    .expect("Failed to bind Actix server")
    .run();

    info!("Server running on port 8080");
    server.await?;

    Ok(())
}
