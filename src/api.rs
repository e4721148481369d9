use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Booking, ContactInfo, Customer, Quote, TripDetails, Vehicle, VehicleFare};
use crate::error::Error;
use crate::external::razorpay::PaymentOrder;

#[async_trait]
pub trait VehicleAPI {
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, Error>;
    async fn find_vehicle(&self, id: i32) -> Result<Vehicle, Error>;
}

#[async_trait]
pub trait QuoteAPI {
    async fn list_fares(&self, trip: TripDetails) -> Result<Vec<VehicleFare>, Error>;
    async fn create_quote(&self, vehicle_id: i32, trip: TripDetails) -> Result<Quote, Error>;
    async fn find_quote(&self, token: Uuid) -> Result<Quote, Error>;
}

#[async_trait]
pub trait BookingAPI {
    async fn create_booking(
        &self,
        quote_token: Uuid,
        contact: ContactInfo,
    ) -> Result<Booking, Error>;

    async fn find_booking(&self, reference: String) -> Result<Booking, Error>;

    async fn create_payment_order(&self, reference: String) -> Result<PaymentOrder, Error>;

    async fn confirm_payment(
        &self,
        reference: String,
        order_id: String,
        payment_id: String,
        signature: String,
    ) -> Result<Booking, Error>;

    async fn cancel_booking(&self, reference: String) -> Result<Booking, Error>;
}

#[async_trait]
pub trait CustomerAPI {
    async fn send_otp(&self, email: String) -> Result<(), Error>;

    async fn verify_otp(
        &self,
        email: String,
        otp: String,
        name: Option<String>,
        phone: Option<String>,
    ) -> Result<Customer, Error>;
}

pub trait API: VehicleAPI + QuoteAPI + BookingAPI + CustomerAPI {}
