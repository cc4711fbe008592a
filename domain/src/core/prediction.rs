//! Prediction value object

use serde::{Deserialize, Serialize};

/// A single scalar estimate returned by the model (Value Object)
///
/// Keeps the raw model output; [`Prediction::rounded`] and the `Display`
/// impl give the two-decimal form shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    value: f64,
}

impl Prediction {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Raw model output
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value rounded to two decimal places.
    ///
    /// Rounds on the exact binary value, so `2.675` becomes
    /// `2.67` just as a decimal formatter would print it.
    pub fn rounded(&self) -> f64 {
        if !self.value.is_finite() {
            return self.value;
        }
        format!("{:.2}", self.value)
            .parse()
            .unwrap_or(self.value)
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.rounded())
    }
}

impl From<f64> for Prediction {
    fn from(value: f64) -> Self {
        Prediction::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_has_two_decimals() {
        assert_eq!(Prediction::new(1234.5).to_string(), "1234.50");
        assert_eq!(Prediction::new(7.0).to_string(), "7.00");
        assert_eq!(Prediction::new(-0.126).to_string(), "-0.13");
    }

    #[test]
    fn test_rounded() {
        assert_eq!(Prediction::new(3.14159).rounded(), 3.14);
        assert_eq!(Prediction::new(2.675).rounded(), 2.67);
        assert_eq!(Prediction::new(10.0).rounded(), 10.0);
    }

    #[test]
    fn test_rounded_keeps_non_finite() {
        assert!(Prediction::new(f64::NAN).rounded().is_nan());
        assert_eq!(Prediction::new(f64::INFINITY).rounded(), f64::INFINITY);
    }
}
