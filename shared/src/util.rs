//! Display helpers shared by every presentation of the catalog

use rust_decimal::prelude::*;

/// Money is shown with 2 decimal places, half away from zero
const DECIMAL_PLACES: u32 = 2;

/// Stars in a full rating
const MAX_STARS: u8 = 5;

/// Current UTC timestamp (millis)
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Format a price for display, e.g. `$109.95`
pub fn format_price(value: Decimal) -> String {
    let rounded =
        value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", rounded)
}

/// Cut `text` to at most `max_chars` characters, appending `...` when cut
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head)
}

/// Star breakdown of a 0-5 rating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    /// Any fractional part renders as one half star
    pub fn from_rate(rate: f64) -> Self {
        let rate = if rate.is_finite() {
            rate.clamp(0.0, f64::from(MAX_STARS))
        } else {
            0.0
        };
        let full = rate.floor() as u8;
        let half = rate.fract() > 0.0;
        let empty = MAX_STARS - rate.ceil() as u8;
        Self { full, half, empty }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Decimal::new(10995, 2)), "$109.95");
        assert_eq!(format_price(Decimal::from(40)), "$40.00");
        assert_eq!(format_price(Decimal::new(12345, 3)), "$12.35");
        assert_eq!(format_price(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("exactly", 7), "exactly");
        assert_eq!(truncate_text("a longer title", 8), "a longer...");
        assert_eq!(truncate_text("ñandú rojo", 5), "ñandú...");
    }

    #[test]
    fn test_star_rating() {
        assert_eq!(
            StarRating::from_rate(3.9),
            StarRating { full: 3, half: true, empty: 1 }
        );
        assert_eq!(
            StarRating::from_rate(4.0),
            StarRating { full: 4, half: false, empty: 1 }
        );
        assert_eq!(
            StarRating::from_rate(0.0),
            StarRating { full: 0, half: false, empty: 5 }
        );
        assert_eq!(
            StarRating::from_rate(7.5),
            StarRating { full: 5, half: false, empty: 0 }
        );
    }
}
