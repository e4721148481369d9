use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Quote, TripDetails, VehicleFare};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    vehicle_id: i32,
    trip: TripDetails,
}

pub async fn fares(
    Extension(api): Extension<DynAPI>,
    Json(trip): Json<TripDetails>,
) -> Result<Json<Vec<VehicleFare>>, Error> {
    let fares = api.list_fares(trip).await?;

    Ok(fares.into())
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Quote>, Error> {
    let quote = api.create_quote(params.vehicle_id, params.trip).await?;

    Ok(quote.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(token): Path<Uuid>,
) -> Result<Json<Quote>, Error> {
    let quote = api.find_quote(token).await?;

    Ok(quote.into())
}
