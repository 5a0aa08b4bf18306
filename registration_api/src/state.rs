use crate::api::service::FlightRegistrationService;
use axum::extract::FromRef;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub service: FlightRegistrationService,
}
