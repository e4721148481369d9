use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{invalid_input_error, upstream_error, Error};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Place {
    pub place_id: String,
    pub formatted_address: String,
    pub geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Geometry {
    pub location: Location,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlaceSuggestion {
    pub place_id: String,
    pub description: String,
}

pub type PlaceSuggestions = Vec<PlaceSuggestion>;

// Driving distance and time between two addresses, in the units the fare
// engine works in.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RouteMetrics {
    pub distance_km: f64,
    pub duration_minutes: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response<T> {
    status: String,
    result: Option<T>,
    predictions: Option<T>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct MatrixResponse {
    status: String,
    rows: Vec<MatrixRow>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct MatrixRow {
    elements: Vec<MatrixElement>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct MatrixElement {
    status: String,
    distance: Option<MatrixValue>,
    duration: Option<MatrixValue>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct MatrixValue {
    value: f64,
}

#[tracing::instrument]
pub async fn find_place_suggestions(
    input: String,
    session_token: String,
) -> Result<PlaceSuggestions, Error> {
    let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
    let url = format!("https://{}/maps/api/place/autocomplete/json", api_base);
    let key = env::var("GOOGLE_MAPS_API_KEY")?;

    let res = reqwest::Client::new()
        .get(url)
        .query(&[("key", key)])
        .query(&[("input", input)])
        // city-level suggestions only, matching what the booking form offers
        .query(&[("types", "(cities)".to_string())])
        .query(&[("sessiontoken", session_token)])
        .send()
        .await?;

    let status_code = res.status().as_u16();

    if status_code >= 400 && status_code < 500 {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    let data: Response<PlaceSuggestions> = res.json().await?;

    if !(data.status == "OK" || data.status == "ZERO_RESULTS") {
        return Err(upstream_error());
    }

    Ok(data.predictions.ok_or_else(|| upstream_error())?)
}

#[tracing::instrument]
pub async fn find_place(id: String, session_token: String) -> Result<Place, Error> {
    let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
    let url = format!("https://{}/maps/api/place/details/json", api_base);
    let key = env::var("GOOGLE_MAPS_API_KEY")?;

    let res = reqwest::Client::new()
        .get(url)
        .query(&[("key", key)])
        .query(&[("place_id", id)])
        // only the fields the booking form consumes
        .query(&[("fields", "place_id,formatted_address,geometry".to_string())])
        .query(&[("sessiontoken", session_token)])
        .send()
        .await?;

    let status_code = res.status().as_u16();

    if status_code >= 400 && status_code < 500 {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    let data: Response<Place> = res.json().await?;

    if data.status != "OK" {
        return Err(upstream_error());
    }

    Ok(data.result.ok_or_else(|| upstream_error())?)
}

#[tracing::instrument]
pub async fn distance_matrix(
    origin: String,
    destination: String,
    departure_time: Option<i64>,
) -> Result<RouteMetrics, Error> {
    let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
    let url = format!("https://{}/maps/api/distancematrix/json", api_base);
    let key = env::var("GOOGLE_MAPS_API_KEY")?;

    let mut req = reqwest::Client::new()
        .get(url)
        .query(&[("key", key)])
        .query(&[("origins", origin)])
        .query(&[("destinations", destination)])
        .query(&[("units", "metric".to_string())])
        .query(&[("mode", "driving".to_string())]);

    if let Some(departure_time) = departure_time {
        req = req.query(&[("departure_time", departure_time)]);
    }

    let res = req.send().await?;

    let status_code = res.status().as_u16();

    if status_code >= 400 && status_code < 500 {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    let data: MatrixResponse = res.json().await?;

    if data.status != "OK" {
        return Err(upstream_error());
    }

    let element = data
        .rows
        .first()
        .and_then(|row| row.elements.first())
        .ok_or_else(|| upstream_error())?;

    // NOT_FOUND and ZERO_RESULTS mean the addresses cannot be routed, which
    // is the caller's problem rather than the upstream's.
    match element.status.as_str() {
        "OK" => {}
        "NOT_FOUND" | "ZERO_RESULTS" => return Err(invalid_input_error()),
        _ => return Err(upstream_error()),
    }

    let distance = element.distance.ok_or_else(|| upstream_error())?;
    let duration = element.duration.ok_or_else(|| upstream_error())?;

    Ok(RouteMetrics {
        distance_km: distance.value / 1000.0,
        duration_minutes: duration.value / 60.0,
    })
}
