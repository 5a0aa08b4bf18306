use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stored flight registration, as returned to clients and as persisted in
/// the `flight_data` table. Timestamps are zone-less wall-clock values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FlightRegistrationDto {
    pub id: i64,
    pub flight_name: String,
    pub starting_latitude: f64,
    pub starting_longitude: f64,
    pub ending_latitude: f64,
    pub ending_longitude: f64,
    pub launch_date_and_time: NaiveDateTime,
    pub landing_date_and_time: NaiveDateTime,
    pub max_altitude: f64,
    pub model_of_space_craft: String,
}

/// Request body for POST and PUT. Carries no `id`; the server assigns one on
/// registration, and on update the path segment is authoritative (an `id`
/// field in the body is ignored by deserialization).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFlightRegistration {
    pub flight_name: String,
    pub starting_latitude: f64,
    pub starting_longitude: f64,
    pub ending_latitude: f64,
    pub ending_longitude: f64,
    pub launch_date_and_time: NaiveDateTime,
    pub landing_date_and_time: NaiveDateTime,
    pub max_altitude: f64,
    pub model_of_space_craft: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_registration_body_parses_and_ignores_id() {
        let body = r#"{
            "id": 42,
            "flightName": "Apollo-X",
            "startingLatitude": 28.5,
            "startingLongitude": -80.6,
            "endingLatitude": 28.5,
            "endingLongitude": -80.6,
            "launchDateAndTime": "2025-01-01T00:00:00",
            "landingDateAndTime": "2025-01-01T00:10:00",
            "maxAltitude": 400000.0,
            "modelOfSpaceCraft": "Falcon"
        }"#;

        let parsed: NewFlightRegistration = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.flight_name, "Apollo-X");
        assert_eq!(parsed.max_altitude, 400000.0);
        assert_eq!(
            parsed.launch_date_and_time,
            "2025-01-01T00:00:00".parse::<NaiveDateTime>().unwrap()
        );
    }

    #[test]
    fn stored_registration_serializes_camel_case() {
        let dto = FlightRegistrationDto {
            id: 1,
            flight_name: "Apollo-X".into(),
            starting_latitude: 28.5,
            starting_longitude: -80.6,
            ending_latitude: 28.5,
            ending_longitude: -80.6,
            launch_date_and_time: "2025-01-01T00:00:00".parse().unwrap(),
            landing_date_and_time: "2025-01-01T00:10:00".parse().unwrap(),
            max_altitude: 400000.0,
            model_of_space_craft: "Falcon".into(),
        };

        let json: serde_json::Value = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["flightName"], "Apollo-X");
        assert_eq!(json["launchDateAndTime"], "2025-01-01T00:00:00");
        assert_eq!(json["modelOfSpaceCraft"], "Falcon");
    }
}
