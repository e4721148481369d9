mod booking;
mod customer;
mod quote;
mod rate_card;
mod trip;
mod vehicle;

pub use booking::{Booking, ContactInfo};
pub use customer::{Customer, Verification};
pub use quote::{Quote, VehicleFare};
pub use rate_card::{
    AirportBracket, LocalPackage, LocalRate, LocalRates, OutstationRates, RateCard,
};
pub use trip::{TripDetails, TripType};
pub use vehicle::Vehicle;
