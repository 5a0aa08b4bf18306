use axum::http::StatusCode;
use axum::{Router, routing::get};
use registration_api::api;
use registration_api::api::db::queries::PgFlightRegistrationStore;
use registration_api::api::service::FlightRegistrationService;
use registration_api::state::AppState;
use shared::{initialize_db, load_config};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config()?;
    let pool = initialize_db(&config.postgres, true).await?;

    let store = Arc::new(PgFlightRegistrationStore::new(pool));
    let state = AppState {
        service: FlightRegistrationService::new(store),
    };

    let app = Router::new()
        .route("/health", get(|| async { StatusCode::OK }))
        .nest("/api", api::router(state))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    const LISTEN_ADDR: &str = "0.0.0.0:8080";
    info!("starting server at {LISTEN_ADDR}");
    let listener = tokio::net::TcpListener::bind(LISTEN_ADDR).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shared::shutdown_listener(None))
        .await?;

    Ok(())
}
