pub mod client;
pub mod configuration;
pub mod dashboard;
pub mod errors;
pub mod popup;
pub mod routes;
pub mod startup;
pub mod state;
pub mod telemetry;
pub mod types;
