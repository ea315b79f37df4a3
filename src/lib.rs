pub mod client;
pub mod configuration;
pub mod domain;
pub mod error;
pub mod resources;
pub mod telemetry;

mod wire;

pub use client::ClassClient;
pub use error::ClassError;
