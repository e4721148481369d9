pub mod api;
pub mod catalog;
pub mod db;
pub mod engine;
pub mod entities;
pub mod error;
pub mod external;
pub mod fare;
pub mod server;
