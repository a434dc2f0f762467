use serde::Serialize;

use crate::{currency::CurrencyFormat, tip};

/// Machine-readable result of one calculation.
#[derive(Debug, PartialEq, Serialize)]
pub struct TipReport {
    pub amount: f64,
    pub tip_percent: f64,
    pub round_up: bool,
    pub tip: f64,
    pub formatted: String,
    pub locale: &'static str,
}

impl TipReport {
    pub fn new(
        amount: f64,
        tip_percent: Option<f64>,
        round_up: bool,
        format: &CurrencyFormat,
    ) -> Self {
        Self {
            amount,
            tip_percent: tip_percent.unwrap_or(tip::DEFAULT_TIP_PERCENT_RATE),
            round_up,
            tip: tip::tip_amount(amount, tip_percent, round_up),
            formatted: tip::calculate_tip(amount, tip_percent, round_up, format),
            locale: format.locale,
        }
    }
}
