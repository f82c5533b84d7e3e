use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw stored price units per displayed currency unit.
///
/// Quotes are stored as fixed-point integers scaled by this constant to
/// avoid accumulating float error in stored prices.
pub const QUOTE_SCALE: f64 = 100_000_000.0;

/// Single quote in a security's price history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    /// Fixed-point quote, scaled by `QUOTE_SCALE`
    pub value: i64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, value: i64) -> Self {
        Self { date, value }
    }

    /// Build a point from a displayed quote (e.g. `103.25`)
    pub fn from_quote(date: NaiveDate, quote: f64) -> Self {
        Self {
            date,
            value: (quote * QUOTE_SCALE).round() as i64,
        }
    }

    /// Quote in display units
    pub fn quote(&self) -> f64 {
        self.value as f64 / QUOTE_SCALE
    }
}

/// Converts fixed-point quotes into a term currency.
///
/// Opaque to the chart calculations; rate lookup and interpolation live
/// behind this trait.
pub trait CurrencyConverter {
    /// Currency code the converter translates into
    fn term_currency(&self) -> &str;

    /// Convert a scaled quote as of the given date
    fn convert(&self, date: NaiveDate, value: i64) -> i64;
}

/// Constant-rate converter for tests and offline use
#[derive(Debug, Clone)]
pub struct FixedRateConverter {
    term: String,
    rate: f64,
}

impl FixedRateConverter {
    pub fn new(term: impl Into<String>, rate: f64) -> Self {
        Self {
            term: term.into(),
            rate,
        }
    }
}

impl CurrencyConverter for FixedRateConverter {
    fn term_currency(&self) -> &str {
        &self.term
    }

    fn convert(&self, _date: NaiveDate, value: i64) -> i64 {
        (value as f64 * self.rate).round() as i64
    }
}

/// A tradable instrument with an ordered quote history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Security {
    pub name: String,
    /// Currency the stored quotes are denominated in
    pub currency: String,
    prices: Vec<PricePoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    latest: Option<PricePoint>,
}

impl Security {
    pub fn new(name: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            currency: currency.into(),
            prices: Vec::new(),
            latest: None,
        }
    }

    /// Build a security from an existing history; points are sorted by date
    pub fn with_prices(
        name: impl Into<String>,
        currency: impl Into<String>,
        mut prices: Vec<PricePoint>,
    ) -> Self {
        prices.sort_by_key(|p| p.date);
        Self {
            name: name.into(),
            currency: currency.into(),
            prices,
            latest: None,
        }
    }

    /// Insert a historic quote, keeping the series ordered by date
    pub fn add_price(&mut self, price: PricePoint) {
        let index = self.prices.partition_point(|p| p.date <= price.date);
        self.prices.insert(index, price);
    }

    /// Attach a latest/live quote
    pub fn set_latest(&mut self, latest: PricePoint) {
        self.latest = Some(latest);
    }

    pub fn prices(&self) -> &[PricePoint] {
        &self.prices
    }

    /// Full ordered history with the latest quote appended when it
    /// postdates the stored series
    pub fn prices_including_latest(&self) -> Vec<PricePoint> {
        let mut all = self.prices.clone();
        if let Some(latest) = self.latest {
            match all.last() {
                Some(last) if latest.date <= last.date => {}
                _ => all.push(latest),
            }
        }
        all
    }

    /// Convert a snapshot of the history into the converter's term
    /// currency; a no-op when the security already trades in it.
    ///
    /// Length and date order of the input are preserved.
    pub fn convert_prices(
        &self,
        converter: &dyn CurrencyConverter,
        prices: Vec<PricePoint>,
    ) -> Vec<PricePoint> {
        if self.currency == converter.term_currency() {
            return prices;
        }
        prices
            .into_iter()
            .map(|p| PricePoint::new(p.date, converter.convert(p.date, p.value)))
            .collect()
    }
}

/// Inclusive date window shown on a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ChartInterval {
    /// `start <= end` is the caller's contract and is not verified
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Index-aligned X/Y axes of one chart line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub dates: Vec<NaiveDate>,
    pub values: Vec<f64>,
}

impl LineSeries {
    pub fn push(&mut self, date: NaiveDate, value: f64) {
        self.dates.push(date);
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_quote_round_trip() {
        let p = PricePoint::from_quote(date(2024, 1, 15), 103.25);
        assert_eq!(p.value, 10_325_000_000);
        assert_eq!(p.quote(), 103.25);
    }

    #[test]
    fn test_add_price_keeps_order() {
        let mut security = Security::new("TQQQ", "USD");
        security.add_price(PricePoint::from_quote(date(2024, 1, 3), 12.0));
        security.add_price(PricePoint::from_quote(date(2024, 1, 1), 10.0));
        security.add_price(PricePoint::from_quote(date(2024, 1, 2), 11.0));

        let dates: Vec<NaiveDate> = security.prices().iter().map(|p| p.date).collect();
        assert_eq!(
            dates,
            vec![date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)]
        );
    }

    #[test]
    fn test_prices_including_latest_appends_newer_quote() {
        let mut security = Security::with_prices(
            "TQQQ",
            "USD",
            vec![
                PricePoint::from_quote(date(2024, 1, 1), 10.0),
                PricePoint::from_quote(date(2024, 1, 2), 11.0),
            ],
        );
        security.set_latest(PricePoint::from_quote(date(2024, 1, 3), 12.0));

        let all = security.prices_including_latest();
        assert_eq!(all.len(), 3);
        assert_eq!(all.last().unwrap().date, date(2024, 1, 3));
    }

    #[test]
    fn test_prices_including_latest_ignores_stale_quote() {
        let mut security = Security::with_prices(
            "TQQQ",
            "USD",
            vec![
                PricePoint::from_quote(date(2024, 1, 1), 10.0),
                PricePoint::from_quote(date(2024, 1, 2), 11.0),
            ],
        );
        security.set_latest(PricePoint::from_quote(date(2024, 1, 2), 11.5));

        assert_eq!(security.prices_including_latest().len(), 2);
    }

    #[test]
    fn test_convert_prices_preserves_length_and_dates() {
        let security = Security::with_prices(
            "TQQQ",
            "USD",
            vec![
                PricePoint::from_quote(date(2024, 1, 1), 10.0),
                PricePoint::from_quote(date(2024, 1, 2), 11.0),
            ],
        );
        let converter = FixedRateConverter::new("EUR", 0.9);
        let converted =
            security.convert_prices(&converter, security.prices_including_latest());

        assert_eq!(converted.len(), 2);
        assert_eq!(converted[0].date, date(2024, 1, 1));
        assert_eq!(converted[0].quote(), 9.0);
    }

    #[test]
    fn test_convert_prices_same_currency_is_noop() {
        let security = Security::with_prices(
            "TQQQ",
            "USD",
            vec![PricePoint::from_quote(date(2024, 1, 1), 10.0)],
        );
        let converter = FixedRateConverter::new("USD", 0.5);
        let converted =
            security.convert_prices(&converter, security.prices_including_latest());

        assert_eq!(converted[0].quote(), 10.0);
    }

    #[test]
    fn test_interval_contains() {
        let interval = ChartInterval::new(date(2024, 1, 2), date(2024, 1, 4));
        assert!(!interval.contains(date(2024, 1, 1)));
        assert!(interval.contains(date(2024, 1, 2)));
        assert!(interval.contains(date(2024, 1, 4)));
        assert!(!interval.contains(date(2024, 1, 5)));
    }
}
