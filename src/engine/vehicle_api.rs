use super::Engine;

use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::{types::Json, Executor, Row};

use crate::{
    api::VehicleAPI,
    entities::Vehicle,
    error::{invalid_input_error, Error},
};

#[async_trait]
impl VehicleAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, Error> {
        let mut conn = self.pool.acquire().await?;

        let mut results = conn.fetch(sqlx::query("SELECT data FROM vehicles ORDER BY id"));

        let mut vehicles = Vec::new();

        while let Some(row) = results.try_next().await? {
            let Json(vehicle): Json<Vehicle> = row.try_get("data")?;
            vehicles.push(vehicle);
        }

        Ok(vehicles)
    }

    #[tracing::instrument(skip(self))]
    async fn find_vehicle(&self, id: i32) -> Result<Vehicle, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(sqlx::query("SELECT data FROM vehicles WHERE id = $1").bind(&id))
            .await?;

        let result = maybe_result.ok_or_else(|| invalid_input_error())?;
        let Json(vehicle) = result.try_get("data")?;

        Ok(vehicle)
    }
}
