use std::cell::OnceCell;

use common::{ChartError, ChartInterval, CurrencyConverter, LineSeries, Result, Security};

use crate::series::PriceSource;

/// Exponential Moving Average line for a security's quote history, clipped
/// to a display interval.
///
/// Compared to the Simple Moving Average, the EMA puts more emphasis on
/// recent quotes and discounts older quotes faster. Each step only needs
/// the previous EMA and a smoothing factor derived from the range:
///
/// ```text
/// smoothing_factor = 2 / (range + 1)
/// ema = (quote * smoothing_factor) + (ema_prev * (1 - smoothing_factor))
/// ```
///
/// The recurrence is seeded with the raw quote at the window start and then
/// run from the very beginning of the history, so quotes before the window
/// warm it up; the seed's influence decays with every pre-window step.
/// Construction only stores configuration; the series is computed on first
/// access and cached for the calculator's lifetime.
pub struct ExponentialMovingAverage<'a, S: PriceSource = Security> {
    range: usize,
    smoothing_factor: f64,
    source: Option<&'a S>,
    interval: ChartInterval,
    converter: Option<&'a dyn CurrencyConverter>,
    result: OnceCell<LineSeries>,
}

impl<'a, S: PriceSource> ExponentialMovingAverage<'a, S> {
    /// Create a calculator for the given averaging range.
    ///
    /// `source` may be `None` when no security is bound yet; the result is
    /// then empty. A range of zero is rejected because it degenerates the
    /// smoothing factor.
    pub fn new(range: usize, source: Option<&'a S>, interval: ChartInterval) -> Result<Self> {
        if range == 0 {
            return Err(ChartError::InvalidParameter(
                "EMA range must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            range,
            smoothing_factor: 2.0 / (range as f64 + 1.0),
            source,
            interval,
            converter: None,
            result: OnceCell::new(),
        })
    }

    /// Create a calculator that converts the whole history into the
    /// converter's term currency before averaging
    pub fn with_conversion(
        range: usize,
        source: Option<&'a S>,
        interval: ChartInterval,
        converter: &'a dyn CurrencyConverter,
    ) -> Result<Self> {
        let mut ema = Self::new(range, source, interval)?;
        ema.converter = Some(converter);
        Ok(ema)
    }

    pub fn range(&self) -> usize {
        self.range
    }

    pub fn smoothing_factor(&self) -> f64 {
        self.smoothing_factor
    }

    /// The calculated EMA line.
    ///
    /// Computed once on first call, then served from the cache. An empty
    /// series means there is nothing to draw, not an error.
    pub fn get_ema(&self) -> &LineSeries {
        self.result.get_or_init(|| self.calculate())
    }

    fn calculate(&self) -> LineSeries {
        let Some(source) = self.source else {
            return LineSeries::default();
        };

        let mut prices = source.prices_including_latest();
        // Convert before windowing: the warm-up quotes ahead of the window
        // must already be in the term currency.
        if let Some(converter) = self.converter {
            prices = source.convert_prices(converter, prices);
        }

        let index = prices.partition_point(|p| p.date < self.interval.start);
        if index >= prices.len() {
            return LineSeries::default();
        }

        // Seed the running EMA with the quote at the window start.
        let mut ema = prices[index].quote();

        let mut series = LineSeries::default();
        for price in &prices {
            if price.date > self.interval.end {
                break;
            }

            ema = price.quote() * self.smoothing_factor + ema * (1.0 - self.smoothing_factor);

            if price.date < self.interval.start {
                continue;
            }

            series.push(price.date, ema);
        }

        series
    }
}
