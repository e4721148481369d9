use axum::extract::{Json, Path, Query};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::external::google_maps::{self, Place, PlaceSuggestions, RouteMetrics};

#[derive(Serialize, Deserialize)]
pub struct SuggestionParams {
    input: String,
    session_token: String,
}

#[derive(Serialize, Deserialize)]
pub struct DetailParams {
    session_token: String,
}

#[derive(Serialize, Deserialize)]
pub struct DistanceParams {
    origin: String,
    destination: String,
    departure_time: Option<i64>,
}

pub async fn suggestions(
    Query(params): Query<SuggestionParams>,
) -> Result<Json<PlaceSuggestions>, Error> {
    let suggestions =
        google_maps::find_place_suggestions(params.input, params.session_token).await?;

    Ok(suggestions.into())
}

pub async fn details(
    Path(id): Path<String>,
    Query(params): Query<DetailParams>,
) -> Result<Json<Place>, Error> {
    let place = google_maps::find_place(id, params.session_token).await?;

    Ok(place.into())
}

pub async fn distance(Query(params): Query<DistanceParams>) -> Result<Json<RouteMetrics>, Error> {
    let metrics =
        google_maps::distance_matrix(params.origin, params.destination, params.departure_time)
            .await?;

    Ok(metrics.into())
}
