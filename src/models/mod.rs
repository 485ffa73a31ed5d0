pub mod air_quality;
pub mod aqi;
pub mod datetime;
pub mod error;
pub mod geo;
pub mod waste;
pub mod water;
