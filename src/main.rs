use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kiloreport::config::Config;
use kiloreport::modules::kilos;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kiloreport=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");

    tracing::info!("Starting kiloreport branch kilos reporting service");
    tracing::info!("Server binding to: {}", config.server.bind_address());
    if config.odoo.is_none() {
        tracing::warn!(
            "Odoo credentials incomplete (ODOO_URL, ODOO_DB, ODOO_USERNAME, ODOO_PASSWORD); \
             report endpoints will answer 500 until they are set"
        );
    }

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let app_config = web::Data::new(config);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_config.clone())
            .wrap(TracingLogger::default())
            .configure(kilos::configure)
            .route("/health", web::get().to(health_check))
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "kiloreport"
    }))
}
