use super::PaymentProcessor;

use crate::fields::PaymentInput;
use crate::method::PaymentMethod;

const COMMISSION_RATE: f64 = 0.03;

#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardProcessor;

impl PaymentProcessor for CreditCardProcessor {
    fn method(&self) -> PaymentMethod {
        return PaymentMethod::CreditCard;
    }

    fn required_fields(&self) -> &'static [&'static str] {
        return &["card_number", "expiry_date", "cvv"];
    }

    fn commission_rate(&self) -> f64 {
        return COMMISSION_RATE;
    }

    fn validate_extra(&self, input: &PaymentInput) -> bool {
        // Card verification values are at least 3 digits
        return input.text("cvv").map_or(false, |cvv| cvv.len() >= 3);
    }
}
