//! Integer-cent monetary helpers.
//!
//! All prices and totals in the engine are `i64` cents; percentages are
//! basis points (1000 bps = 10%). Floating point never touches money.

/// Monetary amount in cents.
pub type Cents = i64;

/// Total for `quantity` units at `price_cents` each.
pub fn line_total(price_cents: Cents, quantity: u32) -> Cents {
    price_cents * quantity as i64
}

/// `rate_bps` basis points of `amount_cents`, rounded half-up.
pub fn percentage(amount_cents: Cents, rate_bps: i64) -> Cents {
    // i128 keeps the intermediate product from overflowing on large totals
    ((amount_cents as i128 * rate_bps as i128 + 5_000) / 10_000) as i64
}

/// Human-readable dollar rendering, e.g. `1099` -> `"$10.99"`.
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, (cents / 100).abs(), (cents % 100).abs())
}
