use crate::api::api_models::{FlightRegistrationDto, NewFlightRegistration};
use crate::api::db::queries::{FlightRegistrationStore, QueryError};
use std::sync::Arc;

/// Pass-through layer between the handlers and the store. Each method is one
/// call in, one call out; no validation or error translation happens here.
#[derive(Clone)]
pub struct FlightRegistrationService {
    store: Arc<dyn FlightRegistrationStore>,
}

impl FlightRegistrationService {
    pub fn new(store: Arc<dyn FlightRegistrationStore>) -> Self {
        Self { store }
    }

    pub async fn register_flight(
        &self,
        registration: &NewFlightRegistration,
    ) -> Result<FlightRegistrationDto, QueryError> {
        self.store.insert(registration).await
    }

    pub async fn get_all_flight_registrations(
        &self,
    ) -> Result<Vec<FlightRegistrationDto>, QueryError> {
        self.store.find_all().await
    }

    pub async fn update_flight_registration(
        &self,
        id: i64,
        registration: &NewFlightRegistration,
    ) -> Result<Option<FlightRegistrationDto>, QueryError> {
        self.store.update(id, registration).await
    }

    pub async fn delete_flight_registration(&self, id: i64) -> Result<(), QueryError> {
        self.store.delete_by_id(id).await
    }
}
