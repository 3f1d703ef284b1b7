use super::PaymentProcessor;

use crate::method::PaymentMethod;

const COMMISSION_RATE: f64 = 0.02;

/// No format checks beyond field presence for PayPal.
#[derive(Debug, Default, Clone, Copy)]
pub struct PayPalProcessor;

impl PaymentProcessor for PayPalProcessor {
    fn method(&self) -> PaymentMethod {
        return PaymentMethod::PayPal;
    }

    fn required_fields(&self) -> &'static [&'static str] {
        return &["email", "password"];
    }

    fn commission_rate(&self) -> f64 {
        return COMMISSION_RATE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::fields::PaymentInput;

    fn valid_input() -> PaymentInput {
        return PaymentInput::new()
            .with_text("email", "test@example.com")
            .with_text("password", "validpassword");
    }

    #[test]
    fn validates_complete_data() {
        let processor = PayPalProcessor;
        assert!(processor.validate_data(&valid_input()));
    }

    #[test]
    fn rejects_missing_password() {
        let processor = PayPalProcessor;
        let input = PaymentInput::new().with_text("email", "test@example.com");
        assert!(!processor.validate_data(&input));
    }

    #[test]
    fn validation_is_idempotent() {
        let processor = PayPalProcessor;
        let input = valid_input();
        assert_eq!(
            processor.validate_data(&input),
            processor.validate_data(&input),
        );
        assert!(processor.validate_data(&input));
    }

    #[test]
    fn commission_is_two_percent() {
        let processor = PayPalProcessor;
        let commission = processor.calculate_commission(100.0);
        assert!((commission - 2.0).abs() < 1e-9);
    }

    #[test]
    fn processes_payment() {
        let processor = PayPalProcessor;
        let input = valid_input().with_number("amount", 100.0);

        let result = processor.process_payment(&input);

        assert!(result.success);
        assert!(result.transaction_id.as_str().starts_with("PP-"));
        assert_eq!(result.amount, 100.0);
    }

    #[test]
    fn generates_receipt() {
        let processor = PayPalProcessor;
        let input = valid_input()
            .with_number("amount", 100.0)
            .with_text("transaction_id", "123456");

        let receipt = processor.generate_receipt(&input);

        assert!(receipt.contains("PayPal Payment"));
        assert!(receipt.contains("100.00"));
        assert!(receipt.contains("123456"));
    }
}
