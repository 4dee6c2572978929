pub mod cache;
pub mod database;
pub mod geocoding;
pub mod repositories;
pub mod routing;
