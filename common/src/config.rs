use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Chart series parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartParameters {
    /// EMA averaging window lengths, one line series per entry
    pub ema_ranges: Vec<usize>,
    /// Display window start; `None` falls back to the first available quote
    pub start: Option<NaiveDate>,
    /// Display window end; `None` falls back to the last available quote
    pub end: Option<NaiveDate>,
    /// Convert quotes into the base currency before averaging
    pub use_base_currency: bool,
}

impl Default for ChartParameters {
    fn default() -> Self {
        Self {
            ema_ranges: vec![20],
            start: None,
            end: None,
            use_base_currency: false,
        }
    }
}

impl ChartParameters {
    pub fn with_ranges(mut self, ranges: Vec<usize>) -> Self {
        self.ema_ranges = ranges;
        self
    }

    pub fn with_interval(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn in_base_currency(mut self) -> Self {
        self.use_base_currency = true;
        self
    }
}
