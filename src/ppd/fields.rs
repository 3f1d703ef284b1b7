use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single value in a payment's field map.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return match self {
            Self::Text(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
        };
    }
}

/// The field map describing one payment. The shape varies by payment method;
/// nothing is checked until the map is passed through a processor's
/// `validate_data`.
///
/// Backed by an ordered map so `canonical` is deterministic for equal contents.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct PaymentInput(BTreeMap<String, FieldValue>);

impl PaymentInput {
    pub fn new() -> Self {
        return Self(BTreeMap::new());
    }

    pub fn with_text(mut self, field: &str, value: &str) -> Self {
        self.insert_text(field, value);
        return self;
    }

    pub fn with_number(mut self, field: &str, value: f64) -> Self {
        self.insert_number(field, value);
        return self;
    }

    pub fn insert_text(&mut self, field: &str, value: &str) {
        self.0
            .insert(field.to_string(), FieldValue::Text(value.to_string()));
    }

    pub fn insert_number(&mut self, field: &str, value: f64) {
        self.0.insert(field.to_string(), FieldValue::Number(value));
    }

    pub fn has(&self, field: &str) -> bool {
        return self.0.contains_key(field);
    }

    pub fn text(&self, field: &str) -> Option<&str> {
        return match self.0.get(field) {
            Some(FieldValue::Text(value)) => Some(value),
            _ => None,
        };
    }

    pub fn number(&self, field: &str) -> Option<f64> {
        return match self.0.get(field) {
            Some(FieldValue::Number(value)) => Some(*value),
            _ => None,
        };
    }

    /// The payment amount, defaulting to 0.0 when the field is absent.
    pub fn amount(&self) -> f64 {
        return self.number("amount").unwrap_or(0.0);
    }

    /// Stable `field=value` serialization used to derive transaction ids.
    pub fn canonical(&self) -> String {
        let pairs: Vec<String> = self
            .0
            .iter()
            .map(|(field, value)| format!("{field}={value}"))
            .collect();

        return pairs.join(";");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_defaults_to_zero() {
        let input = PaymentInput::new().with_text("email", "test@example.com");
        assert_eq!(input.amount(), 0.0);
    }

    #[test]
    fn amount_reads_number_field() {
        let input = PaymentInput::new().with_number("amount", 59.99);
        assert_eq!(input.amount(), 59.99);
    }

    #[test]
    fn text_ignores_number_fields() {
        let input = PaymentInput::new().with_number("amount", 1.0);
        assert_eq!(input.text("amount"), None);
        assert!(input.has("amount"));
    }

    #[test]
    fn canonical_is_insertion_order_independent() {
        let a = PaymentInput::new()
            .with_text("email", "test@example.com")
            .with_number("amount", 100.0);
        let b = PaymentInput::new()
            .with_number("amount", 100.0)
            .with_text("email", "test@example.com");

        assert_eq!(a.canonical(), b.canonical());
    }

    #[test]
    fn canonical_distinguishes_values() {
        let a = PaymentInput::new().with_text("email", "a@example.com");
        let b = PaymentInput::new().with_text("email", "b@example.com");

        assert_ne!(a.canonical(), b.canonical());
    }
}
