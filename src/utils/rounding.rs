use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds the exact stored value of `value` to `places` decimal digits, ties to
/// even (`0.125 -> 0.12`). `12.345` is stored slightly above the half and so
/// rounds up. Values outside the decimal range are returned unchanged.
pub fn round_to(value: f64, places: u32) -> f64 {
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return value;
    };
    let rounded = exact.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven);
    // The shortest decimal rendering parses back to the nearest f64.
    rounded.to_string().parse().unwrap_or(value)
}
