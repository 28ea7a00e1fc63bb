mod config;
mod error;
pub mod chart;
pub mod query;
pub mod records;
pub mod session;
pub mod stats;

pub use config::{Config, ConfigError};
pub use error::{ApiError, Result};
pub use query::{Filter, PageQuery};
pub use records::Listing;
