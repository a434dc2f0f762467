/// Converts user-entered text to a number, using 0 for anything that is not a finite decimal.
pub fn normalize(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}
