use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::entities::TripDetails;
use crate::error::{invalid_input_error, invalid_state_error, Error};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactInfo {
    pub fn validate(&self) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(invalid_input_error());
        }

        if !self.email.contains('@') {
            return Err(invalid_input_error());
        }

        // Indian mobile numbers, without the country prefix.
        if self.phone.len() != 10 || !self.phone.bytes().all(|digit| digit.is_ascii_digit()) {
            return Err(invalid_input_error());
        }

        Ok(())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Booking {
    pub reference: String,
    pub status: Status,
    pub contact: ContactInfo,
    pub vehicle_id: i32,
    pub vehicle_name: String,
    pub trip: TripDetails,
    pub fare: i64,
    pub order_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Status {
    PaymentPending,
    Confirmed {
        order_id: String,
        payment_id: String,
    },
    Cancelled,
}

impl Status {
    pub fn name(&self) -> String {
        match self {
            Self::PaymentPending => "payment_pending".into(),
            Self::Confirmed {
                order_id: _,
                payment_id: _,
            } => "confirmed".into(),
            Self::Cancelled => "cancelled".into(),
        }
    }
}

impl Booking {
    pub fn new(
        contact: ContactInfo,
        vehicle_id: i32,
        vehicle_name: String,
        trip: TripDetails,
        fare: i64,
    ) -> Self {
        Self {
            reference: new_reference(),
            status: Status::PaymentPending,
            contact,
            vehicle_id,
            vehicle_name,
            trip,
            fare,
            order_id: None,
            created_at: Utc::now(),
        }
    }

    pub fn is_payment_pending(&self) -> bool {
        match self.status {
            Status::PaymentPending => true,
            _ => false,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        match self.status {
            Status::Confirmed {
                order_id: _,
                payment_id: _,
            } => true,
            _ => false,
        }
    }

    #[tracing::instrument]
    pub fn attach_order(&mut self, order_id: String) -> Result<(), Error> {
        if !self.is_payment_pending() {
            return Err(invalid_state_error());
        }

        self.order_id = Some(order_id);
        Ok(())
    }

    #[tracing::instrument]
    pub fn confirm_payment(&mut self, order_id: String, payment_id: String) -> Result<(), Error> {
        if !self.is_payment_pending() {
            return Err(invalid_state_error());
        }

        // The confirmed order must be the one created for this booking.
        if self.order_id.as_deref() != Some(order_id.as_str()) {
            return Err(invalid_input_error());
        }

        self.status = Status::Confirmed {
            order_id,
            payment_id,
        };

        Ok(())
    }

    #[tracing::instrument]
    pub fn cancel(&mut self) -> Result<(), Error> {
        match self.status {
            Status::PaymentPending
            | Status::Confirmed {
                order_id: _,
                payment_id: _,
            } => {
                self.status = Status::Cancelled;
                Ok(())
            }
            _ => Err(invalid_state_error()),
        }
    }
}

// "HB" + the last six digits of the epoch millis + four random digits, the
// shape customers already see on their confirmations.
fn new_reference() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = rand::thread_rng().gen_range(0..10_000);

    format!("HB{:06}{:04}", millis % 1_000_000, suffix)
}
