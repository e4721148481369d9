pub mod bookings;
pub mod customers;
pub mod places;
pub mod quotes;
pub mod vehicles;
