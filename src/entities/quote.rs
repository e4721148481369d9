use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{TripDetails, Vehicle};

// One row of the select-car page: a vehicle able to run the trip and what it
// would cost.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VehicleFare {
    pub vehicle: Vehicle,
    pub fare: i64,
}

// A priced trip for one vehicle, held under an opaque token until the
// customer books it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quote {
    pub token: Uuid,
    pub vehicle_id: i32,
    pub vehicle_name: String,
    pub trip: TripDetails,
    pub fare: i64,
    pub created_at: DateTime<Utc>,
}

impl Quote {
    pub fn new(vehicle_id: i32, vehicle_name: String, trip: TripDetails, fare: i64) -> Self {
        Self {
            token: Uuid::new_v4(),
            vehicle_id,
            vehicle_name,
            trip,
            fare,
            created_at: Utc::now(),
        }
    }
}
