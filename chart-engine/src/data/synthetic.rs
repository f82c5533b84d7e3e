use chrono::{Datelike, Duration, Utc, Weekday};
use common::PricePoint;
use rand::Rng;

/// Generate a synthetic daily quote history for chart testing.
///
/// Weekends are skipped, so the series has the date gaps of a real
/// exchange price history.
pub fn generate_synthetic_prices(days: usize, initial_quote: f64) -> Vec<PricePoint> {
    let mut rng = rand::thread_rng();
    let mut prices = Vec::with_capacity(days);

    let mut quote = initial_quote;
    // Start far enough back to cover the gaps left by weekends
    let mut date = Utc::now().date_naive() - Duration::days((days as i64) * 7 / 5 + 7);

    let daily_volatility = 0.02;
    let drift = 0.0002;

    while prices.len() < days {
        date += Duration::days(1);
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            continue;
        }

        let random_return: f64 = rng.gen_range(-1.0..1.0);
        quote *= 1.0 + drift + daily_volatility * random_return;

        prices.push(PricePoint::from_quote(date, quote));
    }

    prices
}
