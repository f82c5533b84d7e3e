pub mod data;
pub mod series;

pub use data::{generate_synthetic_prices, load_file};
pub use series::{ExponentialMovingAverage, PriceSource};

// Re-export common types
pub use common::{
    ChartError, ChartInterval, ChartParameters, CurrencyConverter, FixedRateConverter, LineSeries,
    PricePoint, Result, Security,
};
