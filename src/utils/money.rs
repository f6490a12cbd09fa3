//! Money formatting for demo output
//!
//! The storefront's own money formatter lives outside this layer; the demo
//! session only needs dollars-and-cents text for its log lines.

use crate::state::PriceDisplay;

/// Minor units to display text: 1234 -> "$12.34".
pub fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Render a price display the way the sticky control's markup would.
pub fn format_price(price: PriceDisplay) -> String {
    match price {
        PriceDisplay::Regular(price) => format_cents(price),
        PriceDisplay::Sale { price, compare_at } => {
            format!("{} (was {})", format_cents(price), format_cents(compare_at))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cents_format_with_two_decimal_places() {
        assert_eq!(format_cents(1_234), "$12.34");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(100), "$1.00");
    }

    #[test]
    fn sale_prices_show_the_comparison() {
        let text = format_price(PriceDisplay::Sale { price: 1_999, compare_at: 2_499 });
        assert_eq!(text, "$19.99 (was $24.99)");
    }
}
