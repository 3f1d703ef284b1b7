use super::PaymentProcessor;

use crate::fields::PaymentInput;
use crate::method::PaymentMethod;

const COMMISSION_RATE: f64 = 0.01;

#[derive(Debug, Default, Clone, Copy)]
pub struct BankTransferProcessor;

impl PaymentProcessor for BankTransferProcessor {
    fn method(&self) -> PaymentMethod {
        return PaymentMethod::BankTransfer;
    }

    fn required_fields(&self) -> &'static [&'static str] {
        return &["account_number", "routing_number", "account_holder"];
    }

    fn commission_rate(&self) -> f64 {
        return COMMISSION_RATE;
    }

    fn validate_extra(&self, input: &PaymentInput) -> bool {
        // Account numbers shorter than 10 characters are not real accounts
        return input
            .text("account_number")
            .map_or(false, |account| account.len() > 9);
    }
}
