use serde::{Deserialize, Serialize};

use crate::entities::RateCard;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i32,
    pub category: String,
    pub name: String,
    pub image: String,
    pub seating_capacity: u32,
    pub luggage_capacity: u32,
    pub features: Vec<String>,
    pub rates: RateCard,
}
