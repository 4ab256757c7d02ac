pub mod client;
pub mod config;
pub mod object;
pub mod params;
