use actix_web::{web, App, HttpServer};
use crabbie::config::ServerConfig;
use crabbie::infra::state::build_state;
use crabbie::middleware::cors::cors_middleware;
use crabbie::middleware::request_trace::RequestTrace;
use crabbie::middleware::structured_logger::StructuredLogger;
use crabbie::middleware::trace_span::TraceSpan;
use crabbie::routes;
use crabbie::telemetry;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    info!(
        host = %config.host,
        port = config.port,
        code_length = config.game.code_length,
        removal_policy = ?config.game.removal_policy,
        fetch_advances_turn = config.game.fetch_advances_turn,
        "starting crabbie"
    );

    let data = web::Data::new(build_state().with_settings(config.game.clone()).build());
    let origins = config.cors_allowed_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
