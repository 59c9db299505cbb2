pub const BASE_PRICE: u32 = 790;
/// Bonus per rating point.
pub const RATING_STEP: f64 = 50.0;
/// Rating assumed for records that carry none.
pub const DEFAULT_RATING: f64 = 7.0;

/// Round half up, the way browser `Math.round` does for non-negative input.
pub fn js_round(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    (value + 0.5).floor() as u32
}

pub fn price_for_rating(rating: f64) -> u32 {
    BASE_PRICE + js_round(rating * RATING_STEP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_follows_rating() {
        assert_eq!(price_for_rating(DEFAULT_RATING), 1140);
        assert_eq!(price_for_rating(8.0), 1190);
        assert_eq!(price_for_rating(0.0), BASE_PRICE);
        assert_eq!(price_for_rating(7.25), 1153);
    }

    #[test]
    fn price_is_monotonic_in_rating() {
        let mut last = 0;
        for step in 0..=100 {
            let price = price_for_rating(f64::from(step) / 10.0);
            assert!(price >= last, "price dropped at rating {}", step);
            last = price;
        }
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(js_round(2.5), 3);
        assert_eq!(js_round(2.4999), 2);
        assert_eq!(js_round(f64::NAN), 0);
    }
}
