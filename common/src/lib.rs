pub mod config;
pub mod error;
pub mod types;

pub use config::ChartParameters;
pub use error::{ChartError, Result};
pub use types::*;
