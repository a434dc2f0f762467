use crate::currency::CurrencyFormat;

/// Tip percentage used when the caller does not specify one.
pub const DEFAULT_TIP_PERCENT_RATE: f64 = 15.0;

/// The tip as a plain number. Rounding up applies to the whole value, so 2.001 becomes 3.
pub fn tip_amount(amount: f64, tip_percent: Option<f64>, round_up: bool) -> f64 {
    let tip_percent = tip_percent.unwrap_or(DEFAULT_TIP_PERCENT_RATE);
    let tip = tip_percent / 100.0 * amount;

    if round_up { tip.ceil() } else { tip }
}

pub fn calculate_tip(
    amount: f64,
    tip_percent: Option<f64>,
    round_up: bool,
    format: &CurrencyFormat,
) -> String {
    format.format(tip_amount(amount, tip_percent, round_up))
}
