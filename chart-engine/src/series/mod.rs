pub mod ema;

pub use ema::ExponentialMovingAverage;

use common::{CurrencyConverter, PricePoint, Security};

/// Source of a security's quote history.
///
/// `Security` is the production implementation; the indirection lets tests
/// drive a calculator with an instrumented provider.
pub trait PriceSource {
    /// Full ordered history, with the latest/live quote appended when it
    /// postdates the stored series
    fn prices_including_latest(&self) -> Vec<PricePoint>;

    /// Convert a snapshot of the history into the converter's term
    /// currency, preserving length and date order
    fn convert_prices(
        &self,
        converter: &dyn CurrencyConverter,
        prices: Vec<PricePoint>,
    ) -> Vec<PricePoint>;
}

impl PriceSource for Security {
    fn prices_including_latest(&self) -> Vec<PricePoint> {
        Security::prices_including_latest(self)
    }

    fn convert_prices(
        &self,
        converter: &dyn CurrencyConverter,
        prices: Vec<PricePoint>,
    ) -> Vec<PricePoint> {
        Security::convert_prices(self, converter, prices)
    }
}
