pub mod cli;
pub mod config;
pub mod error;
pub mod inference;
pub mod server;
pub mod telemetry;

pub use error::{Error, Result};
