use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDate;
use common::{ChartError, PricePoint, Result};

/// Load quotes from CSV file
pub fn load_csv(path: &Path) -> Result<Vec<PricePoint>> {
    let file = File::open(path).map_err(|e| ChartError::DataLoadError(e.to_string()))?;
    let reader = BufReader::new(file);
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut prices = Vec::new();

    for result in csv_reader.records() {
        let record = result.map_err(|e| ChartError::CsvError(e.to_string()))?;

        // Expected columns: date, close, [...]
        if record.len() < 2 {
            continue;
        }

        let date = parse_date(&record[0])?;
        let quote: f64 = record[1]
            .parse()
            .map_err(|_| ChartError::CsvError("Invalid quote".to_string()))?;

        prices.push(PricePoint::from_quote(date, quote));
    }

    Ok(prices)
}

/// Load quotes from JSON file
pub fn load_json(path: &Path) -> Result<Vec<PricePoint>> {
    let file = File::open(path).map_err(|e| ChartError::DataLoadError(e.to_string()))?;
    let reader = BufReader::new(file);
    let prices: Vec<PricePoint> = serde_json::from_reader(reader)?;
    Ok(prices)
}

/// Parse a calendar date from various formats
fn parse_date(s: &str) -> Result<NaiveDate> {
    let formats = ["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y", "%m/%d/%Y"];

    for fmt in &formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }

    // Fall back to a full timestamp, keeping only the date
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }

    Err(ChartError::CsvError(format!("Unable to parse date: {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_date_iso() {
        let date = parse_date("2024-01-15").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_parse_date_slashes() {
        let date = parse_date("2024/01/15").unwrap();
        assert_eq!(date.year(), 2024);
    }

    #[test]
    fn test_parse_date_european() {
        let date = parse_date("15.01.2024").unwrap();
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_parse_date_rfc3339() {
        let date = parse_date("2024-01-15T09:30:00Z").unwrap();
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_parse_date_invalid() {
        assert!(parse_date("not-a-date").is_err());
    }
}
