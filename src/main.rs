use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use learning_tools_server::{app_state::AppState, config::Config, errors::AppError, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let state = AppState::new(config);

    log::info!("starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                AppError::Validation(err.to_string()).into()
            }))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::quiz)
            .service(handlers::scheduler)
            .service(handlers::summarizer)
            .service(handlers::health_check)
    })
    .bind((host, port))?
    .run()
    .await
}
