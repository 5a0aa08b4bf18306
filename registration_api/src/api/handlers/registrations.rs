use crate::api::api_models::{FlightRegistrationDto, NewFlightRegistration};
use crate::api::error::ApiError;
use crate::api::service::FlightRegistrationService;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

pub async fn register_flight(
    State(service): State<FlightRegistrationService>,
    Json(registration): Json<NewFlightRegistration>,
) -> Result<(StatusCode, Json<FlightRegistrationDto>), ApiError> {
    let stored = service.register_flight(&registration).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn get_all_flight_registrations(
    State(service): State<FlightRegistrationService>,
) -> Result<Json<Vec<FlightRegistrationDto>>, ApiError> {
    let registrations = service.get_all_flight_registrations().await?;
    Ok(Json(registrations))
}

pub async fn update_flight_registration(
    State(service): State<FlightRegistrationService>,
    Path(id): Path<i64>,
    Json(registration): Json<NewFlightRegistration>,
) -> Result<Json<FlightRegistrationDto>, ApiError> {
    // The path segment is the identity; any id in the body was dropped at parse time.
    let updated = service
        .update_flight_registration(id, &registration)
        .await?
        .ok_or(ApiError::RegistrationNotFound(id))?;
    Ok(Json(updated))
}

pub async fn delete_flight_registration(
    State(service): State<FlightRegistrationService>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    service.delete_flight_registration(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
