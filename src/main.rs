mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod planner;
mod repository;
mod services;
mod utils;

use std::io;
use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use log::{error, info};

use config::AppConfig;
use repository::PgEmployeeRepository;
use services::EmployeeService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().map_err(|err| {
        error!("Invalid configuration: {}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err)
    })?;

    let pool = db::create_pool(&config).await.map_err(|err| {
        error!("Failed to connect to the database: {}", err);
        io::Error::new(io::ErrorKind::Other, err)
    })?;

    let service = web::Data::new(EmployeeService::new(Arc::new(PgEmployeeRepository::new(pool))));
    let max_json_size = config.max_json_size;

    info!("Starting server at {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .app_data(handlers::json_config(max_json_size))
            .wrap(middleware::Logger::default())
            .configure(handlers::configure)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
