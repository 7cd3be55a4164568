/// Format a price held in cents as US dollars, e.g. `10000` -> `$100.00`.
#[must_use]
pub fn format_price(cents: u32) -> String {
    let whole = cents / 100;
    let frac = cents % 100;
    format!("${whole}.{frac:02}")
}

/// Prefix `noun` with `count`, adding a plural `s` unless the count is exactly one.
#[must_use]
pub fn pluralize(noun: &str, count: u32) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
