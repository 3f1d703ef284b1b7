mod bank_transfer;
mod credit_card;
mod digital_wallet;
mod paypal;

pub use bank_transfer::BankTransferProcessor;
pub use credit_card::CreditCardProcessor;
pub use digital_wallet::DigitalWalletProcessor;
pub use paypal::PayPalProcessor;

use crate::fields::PaymentInput;
use crate::ids::TransactionId;
use crate::method::PaymentMethod;
use crate::models::PaymentResult;

/// Capability interface implemented once per payment method.
///
/// Validation and processing are independent, caller-sequenced steps:
/// `process_payment` performs no re-validation and always reports success, so
/// callers that care must check `validate_data` first.
///
/// Implementations hold no state; every operation is a pure function of its
/// input, and processors can be shared freely across threads.
pub trait PaymentProcessor: Send + Sync + std::fmt::Debug {
    fn method(&self) -> PaymentMethod;

    fn required_fields(&self) -> &'static [&'static str];

    fn commission_rate(&self) -> f64;

    /// Per-method format checks on top of field presence.
    fn validate_extra(&self, _input: &PaymentInput) -> bool {
        return true;
    }

    /// True iff every required field is present and the method's format checks
    /// pass. Boolean only; no field-level diagnostics.
    fn validate_data(&self, input: &PaymentInput) -> bool {
        let present = self
            .required_fields()
            .iter()
            .all(|field| input.has(field));

        return present && self.validate_extra(input);
    }

    fn calculate_commission(&self, amount: f64) -> f64 {
        return amount * self.commission_rate();
    }

    fn process_payment(&self, input: &PaymentInput) -> PaymentResult {
        return PaymentResult {
            success: true,
            transaction_id: TransactionId::derive(self.method(), input),
            amount: input.amount(),
        };
    }

    /// Renders the fixed receipt template. The transaction id is read back
    /// from the input's `transaction_id` field, with "N/A" when absent.
    fn generate_receipt(&self, input: &PaymentInput) -> String {
        let transaction_id = input.text("transaction_id").unwrap_or("N/A");

        return format!(
            "{} Receipt\nAmount: {:.2}\nTransaction ID: {}",
            self.method().display_name(),
            input.amount(),
            transaction_id,
        );
    }
}
