use crate::api::handlers::registrations::{
    delete_flight_registration, get_all_flight_registrations, register_flight,
    update_flight_registration,
};
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, put};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/register-flight",
            get(get_all_flight_registrations).post(register_flight),
        )
        .route(
            "/register-flight/{id}",
            put(update_flight_registration).delete(delete_flight_registration),
        )
        .with_state(state)
}
