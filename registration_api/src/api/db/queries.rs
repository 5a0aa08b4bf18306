use crate::api::api_models::{FlightRegistrationDto, NewFlightRegistration};
use async_trait::async_trait;
use sqlx::{Pool, Postgres};

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error(transparent)]
    Sql(#[from] sqlx::Error),
}

/// Storage interface for flight registrations. Exactly the four operations
/// the entity needs; `update` reports a missing row instead of inserting one.
#[async_trait]
pub trait FlightRegistrationStore: Send + Sync {
    /// Insert a new row; the store assigns the identity.
    async fn insert(
        &self,
        registration: &NewFlightRegistration,
    ) -> Result<FlightRegistrationDto, QueryError>;

    /// All rows in insertion (id) order.
    async fn find_all(&self) -> Result<Vec<FlightRegistrationDto>, QueryError>;

    /// Replace every non-id column of the row with that identity.
    /// Returns `None` when no such row exists.
    async fn update(
        &self,
        id: i64,
        registration: &NewFlightRegistration,
    ) -> Result<Option<FlightRegistrationDto>, QueryError>;

    /// Remove the row with that identity; succeeds even if it was absent.
    async fn delete_by_id(&self, id: i64) -> Result<(), QueryError>;
}

#[derive(Clone)]
pub struct PgFlightRegistrationStore {
    pool: Pool<Postgres>,
}

impl PgFlightRegistrationStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FlightRegistrationStore for PgFlightRegistrationStore {
    async fn insert(
        &self,
        registration: &NewFlightRegistration,
    ) -> Result<FlightRegistrationDto, QueryError> {
        let stored = sqlx::query_as::<_, FlightRegistrationDto>(
            r"
            INSERT INTO flight_data (flight_name, starting_latitude, starting_longitude,
                                     ending_latitude, ending_longitude, launch_date_and_time,
                                     landing_date_and_time, max_altitude, model_of_space_craft)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            ",
        )
        .bind(&registration.flight_name)
        .bind(registration.starting_latitude)
        .bind(registration.starting_longitude)
        .bind(registration.ending_latitude)
        .bind(registration.ending_longitude)
        .bind(registration.launch_date_and_time)
        .bind(registration.landing_date_and_time)
        .bind(registration.max_altitude)
        .bind(&registration.model_of_space_craft)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<FlightRegistrationDto>, QueryError> {
        let registrations = sqlx::query_as::<_, FlightRegistrationDto>(
            r"
            SELECT *
            FROM flight_data
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(registrations)
    }

    async fn update(
        &self,
        id: i64,
        registration: &NewFlightRegistration,
    ) -> Result<Option<FlightRegistrationDto>, QueryError> {
        let stored = sqlx::query_as::<_, FlightRegistrationDto>(
            r"
            UPDATE flight_data
            SET flight_name           = $2,
                starting_latitude     = $3,
                starting_longitude    = $4,
                ending_latitude       = $5,
                ending_longitude      = $6,
                launch_date_and_time  = $7,
                landing_date_and_time = $8,
                max_altitude          = $9,
                model_of_space_craft  = $10
            WHERE id = $1
            RETURNING *
            ",
        )
        .bind(id)
        .bind(&registration.flight_name)
        .bind(registration.starting_latitude)
        .bind(registration.starting_longitude)
        .bind(registration.ending_latitude)
        .bind(registration.ending_longitude)
        .bind(registration.launch_date_and_time)
        .bind(registration.landing_date_and_time)
        .bind(registration.max_altitude)
        .bind(&registration.model_of_space_craft)
        .fetch_optional(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), QueryError> {
        sqlx::query(
            r"
            DELETE FROM flight_data
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
