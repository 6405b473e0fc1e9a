use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use fleet_booking::config::{LoggingSettings, Settings, StoreBackend};
use fleet_booking::core::{BookingOrchestrator, Matcher};
use fleet_booking::routes::{self, AppState};
use fleet_booking::services::{FleetStore, InMemoryFleetStore, PostgresFleetStore};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Initialize logging; RUST_LOG takes precedence over the configured level
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    init_logging(&settings.logging);

    info!("Starting fleet booking service...");

    // Initialize fleet store
    let store: Arc<dyn FleetStore> = match settings.database.backend {
        StoreBackend::Postgres => {
            let store = PostgresFleetStore::from_settings(
                &settings.database.url,
                settings.database.max_connections,
                settings.database.min_connections,
                settings.database.acquire_timeout_secs,
                settings.database.idle_timeout_secs,
            )
            .await
            .map_err(|e| {
                error!("Failed to connect to PostgreSQL: {}", e);
                std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e)
            })?;

            info!(
                "PostgreSQL fleet store initialized (max: {} connections)",
                settings.database.max_connections.unwrap_or(10)
            );
            Arc::new(store)
        }
        StoreBackend::Memory => {
            warn!("Using in-memory fleet store; vehicles are lost on restart");
            Arc::new(InMemoryFleetStore::new())
        }
    };

    // Initialize matcher with configured weights
    let weights = settings.fit_weights();
    let matcher = Matcher::new(weights, settings.matching.result_limit);

    info!(
        "Matcher initialized with weights: {:?}, result limit: {}",
        weights, settings.matching.result_limit
    );

    let app_state = AppState {
        store,
        orchestrator: BookingOrchestrator::new(matcher),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .configure(routes::configure_extractors)
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
