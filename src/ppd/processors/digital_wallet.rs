use super::PaymentProcessor;

use crate::fields::PaymentInput;
use crate::method::PaymentMethod;

use lazy_static::lazy_static;
use regex::Regex;

const COMMISSION_RATE: f64 = 0.015;

lazy_static! {
    static ref SEPARATORS: Regex = Regex::new(r"[\s\-\.\(\)]").unwrap();
    static ref INTERNATIONAL: Regex = Regex::new(r"^\+\d{10,15}$").unwrap();
    static ref NATIONAL: Regex = Regex::new(r"^\d{10}$").unwrap();
}

/// Validates phone numbers after stripping space, dash, dot, and parenthesis
/// separators: either `+` followed by 10-15 digits, or exactly 10 digits.
fn phone_number_is_valid(phone: &str) -> bool {
    let stripped = SEPARATORS.replace_all(phone, "");

    if stripped.starts_with('+') {
        return INTERNATIONAL.is_match(&stripped);
    }

    return NATIONAL.is_match(&stripped);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DigitalWalletProcessor;

impl PaymentProcessor for DigitalWalletProcessor {
    fn method(&self) -> PaymentMethod {
        return PaymentMethod::DigitalWallet;
    }

    fn required_fields(&self) -> &'static [&'static str] {
        return &["wallet_id", "phone_number"];
    }

    fn commission_rate(&self) -> f64 {
        return COMMISSION_RATE;
    }

    fn validate_extra(&self, input: &PaymentInput) -> bool {
        return input
            .text("phone_number")
            .map_or(false, phone_number_is_valid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_with_phone(phone: &str) -> PaymentInput {
        return PaymentInput::new()
            .with_text("wallet_id", "WALLET123")
            .with_text("phone_number", phone);
    }

    #[test]
    fn accepts_international_numbers() {
        let processor = DigitalWalletProcessor;
        assert!(processor.validate_data(&input_with_phone("+1234567890")));
        assert!(processor.validate_data(&input_with_phone("+1-234-567-8900")));
        assert!(processor.validate_data(&input_with_phone("+1.234.567.8900")));
        assert!(processor.validate_data(&input_with_phone("+1 234 567 8900")));
    }

    #[test]
    fn accepts_national_numbers() {
        let processor = DigitalWalletProcessor;
        assert!(processor.validate_data(&input_with_phone("2345678900")));
        assert!(processor.validate_data(&input_with_phone("(234) 567-8900")));
        assert!(processor.validate_data(&input_with_phone("234.567.8900")));
    }

    #[test]
    fn rejects_malformed_numbers() {
        let processor = DigitalWalletProcessor;
        assert!(!processor.validate_data(&input_with_phone("invalid-phone")));
        assert!(!processor.validate_data(&input_with_phone("+123456789")));
        assert!(!processor.validate_data(&input_with_phone("12345678901")));
        assert!(!processor.validate_data(&input_with_phone("")));
    }

    #[test]
    fn rejects_missing_wallet_id() {
        let processor = DigitalWalletProcessor;
        let input = PaymentInput::new().with_text("phone_number", "+1234567890");
        assert!(!processor.validate_data(&input));
    }

    #[test]
    fn commission_is_one_and_a_half_percent() {
        let processor = DigitalWalletProcessor;
        let commission = processor.calculate_commission(100.0);
        assert!((commission - 1.5).abs() < 1e-9);
    }

    #[test]
    fn processes_payment() {
        let processor = DigitalWalletProcessor;
        let input = input_with_phone("+1234567890").with_number("amount", 100.0);

        let result = processor.process_payment(&input);

        assert!(result.success);
        assert!(result.transaction_id.as_str().starts_with("DW-"));
        assert_eq!(result.amount, 100.0);
    }

    #[test]
    fn generates_receipt() {
        let processor = DigitalWalletProcessor;
        let input = input_with_phone("+1234567890")
            .with_number("amount", 100.0)
            .with_text("transaction_id", "123456");

        let receipt = processor.generate_receipt(&input);

        assert!(receipt.contains("Digital Wallet Payment"));
        assert!(receipt.contains("100.00"));
        assert!(receipt.contains("123456"));
    }
}
