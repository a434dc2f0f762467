use crate::{currency::CurrencyFormat, input, tip};

pub const CALCULATE_TIP: &str = "Calculate Tip";
pub const BILL_AMOUNT: &str = "Bill Amount";
pub const TIP_PERCENTAGE: &str = "Tip Percentage";
pub const ROUND_UP_TIP: &str = "Round up tip?";

pub fn tip_amount_label(tip: &str) -> String {
    format!("Tip Amount: {tip}")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    BillAmount,
    TipPercentage,
    RoundUp,
}

impl Field {
    /// Fields in screen order.
    pub const ALL: [Field; 3] = [Field::BillAmount, Field::TipPercentage, Field::RoundUp];

    pub fn label(&self) -> &'static str {
        match self {
            Field::BillAmount => BILL_AMOUNT,
            Field::TipPercentage => TIP_PERCENTAGE,
            Field::RoundUp => ROUND_UP_TIP,
        }
    }
}

/// Raw state of the tip screen. Text is kept as entered and normalized whenever the tip is read.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TipForm {
    amount: String,
    tip_percent: String,
    round_up: bool,
}

impl TipForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_amount(&mut self, text: impl Into<String>) {
        self.amount = text.into();
    }

    pub fn set_tip_percent(&mut self, text: impl Into<String>) {
        self.tip_percent = text.into();
    }

    pub fn set_round_up(&mut self, round_up: bool) {
        self.round_up = round_up;
    }

    /// Applies text entered for `field`. The toggle accepts y/yes/on/true/1; anything else is off.
    pub fn apply(&mut self, field: Field, text: &str) {
        match field {
            Field::BillAmount => self.set_amount(text.trim()),
            Field::TipPercentage => self.set_tip_percent(text.trim()),
            Field::RoundUp => self.set_round_up(matches!(
                text.trim().to_ascii_lowercase().as_str(),
                "y" | "yes" | "on" | "true" | "1"
            )),
        }
    }

    pub fn amount(&self) -> f64 {
        input::normalize(&self.amount)
    }

    // An empty tip field means 0%, not the default rate.
    pub fn tip_percent(&self) -> f64 {
        input::normalize(&self.tip_percent)
    }

    pub fn round_up(&self) -> bool {
        self.round_up
    }

    pub fn tip(&self, format: &CurrencyFormat) -> String {
        tip::calculate_tip(self.amount(), Some(self.tip_percent()), self.round_up, format)
    }

    pub fn label(&self, format: &CurrencyFormat) -> String {
        tip_amount_label(&self.tip(format))
    }
}

#[cfg(test)]
mod tests {
    use crate::currency::CurrencyFormat;
    use crate::form::{Field, TipForm};

    const US: CurrencyFormat = CurrencyFormat::EN_US;

    #[test]
    fn calculate_25_percent_tip() {
        let mut form = TipForm::new();
        form.set_amount("10");
        form.set_tip_percent("25");

        assert_eq!(form.label(&US), "Tip Amount: $2.50");
    }

    #[test]
    fn empty_form() {
        assert_eq!(TipForm::new().label(&US), "Tip Amount: $0.00");
    }

    #[test]
    fn empty_tip_percent_is_zero() {
        let mut form = TipForm::new();
        form.set_amount("80");

        assert_eq!(form.tip_percent(), 0.0);
        assert_eq!(form.tip(&US), "$0.00");
    }

    #[test]
    fn unparseable_amount() {
        let mut form = TipForm::new();
        form.set_amount("ten dollars");
        form.set_tip_percent("25");
        form.set_round_up(true);

        assert_eq!(form.amount(), 0.0);
        assert_eq!(form.tip(&US), "$0.00");
    }

    #[test]
    fn toggle_round_up() {
        let mut form = TipForm::new();
        form.set_amount("30");
        form.set_tip_percent("27");
        assert_eq!(form.tip(&US), "$8.10");

        form.set_round_up(true);
        assert_eq!(form.tip(&US), "$9.00");
    }

    #[test]
    fn apply_fields() {
        let mut form = TipForm::new();
        form.apply(Field::BillAmount, " 30\n");
        form.apply(Field::TipPercentage, "27");
        form.apply(Field::RoundUp, "Yes");

        assert_eq!(form.amount(), 30.0);
        assert_eq!(form.tip_percent(), 27.0);
        assert!(form.round_up());

        form.apply(Field::RoundUp, "maybe");
        assert!(!form.round_up());
    }
}
