use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{invalid_input_error, Error};
use crate::fare::Journey;

// Trip details as the booking front end sends them. The wire form is
// camelCase; unknown trip types fail deserialization outright instead of
// falling through to a zero fare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TripType {
    OneWay,
    RoundTrip,
    Local,
    Airport,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDetails {
    pub trip_type: TripType,
    pub source: String,
    pub destination: Option<String>,
    pub pickup_date: NaiveDate,
    pub pickup_time: String,
    pub return_date: Option<NaiveDate>,
    pub distance_km: f64,
    pub duration_minutes: f64,
    pub package_hours: Option<u32>,
}

impl TripDetails {
    pub fn validate(&self) -> Result<(), Error> {
        if self.source.trim().is_empty() {
            return Err(invalid_input_error());
        }

        if !self.distance_km.is_finite() || self.distance_km < 0.0 {
            return Err(invalid_input_error());
        }

        match self.trip_type {
            TripType::Local => {
                if self.package_hours.is_none() {
                    return Err(invalid_input_error());
                }
            }
            _ => {
                let has_destination = self
                    .destination
                    .as_ref()
                    .map(|destination| !destination.trim().is_empty())
                    .unwrap_or(false);

                if !has_destination {
                    return Err(invalid_input_error());
                }
            }
        }

        Ok(())
    }

    // Days are counted inclusively: out on the 1st, back on the 2nd is a
    // two-day trip.
    pub fn trip_days(&self) -> Result<u32, Error> {
        let return_date = match self.return_date {
            Some(return_date) => return_date,
            None => return Ok(1),
        };

        let span = (return_date - self.pickup_date).num_days();

        if span < 0 {
            return Err(invalid_input_error());
        }

        Ok(span as u32 + 1)
    }

    pub fn journey(&self) -> Result<Journey, Error> {
        match self.trip_type {
            TripType::OneWay => Ok(Journey::Outstation {
                distance_km: self.distance_km,
                trip_days: 1,
            }),
            // A round trip covers the one-way distance twice.
            TripType::RoundTrip => Ok(Journey::Outstation {
                distance_km: self.distance_km * 2.0,
                trip_days: self.trip_days()?,
            }),
            TripType::Local => {
                let package_hours = self.package_hours.ok_or_else(|| invalid_input_error())?;

                Ok(Journey::Local {
                    package_hours,
                    usage: None,
                })
            }
            TripType::Airport => Ok(Journey::Airport {
                distance_km: self.distance_km,
            }),
        }
    }
}
