use crate::method::PaymentMethod;
use crate::processors::{
    BankTransferProcessor, CreditCardProcessor, DigitalWalletProcessor, PayPalProcessor,
    PaymentProcessor,
};
use crate::Result;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DispatchError {
    #[error("Invalid payment method: {0}")]
    InvalidMethod(String),

    #[error("Payment processor not implemented for method: {0}")]
    UnsupportedMethod(PaymentMethod),
}

type Constructor = fn() -> Box<dyn PaymentProcessor>;

/// Registration table mapping each method to its processor constructor.
/// Lookup misses surface as `DispatchError::UnsupportedMethod`.
const PLATFORMS: [(PaymentMethod, Constructor); 4] = [
    (PaymentMethod::CreditCard, || Box::new(CreditCardProcessor)),
    (PaymentMethod::PayPal, || Box::new(PayPalProcessor)),
    (PaymentMethod::BankTransfer, || Box::new(BankTransferProcessor)),
    (PaymentMethod::DigitalWallet, || {
        Box::new(DigitalWalletProcessor)
    }),
];

pub struct Dispatcher;

impl Dispatcher {
    /// Resolves `method` (an enumeration value, or its canonical string form
    /// such as `"bank_transfer"`) and constructs the processor registered for
    /// it. Returns a fresh instance per call; processors are stateless, so
    /// callers may reuse them freely instead.
    pub fn create_payment_method<M>(method: M) -> Result<Box<dyn PaymentProcessor>>
    where
        M: TryInto<PaymentMethod>,
        M::Error: std::error::Error + Send + Sync + 'static,
    {
        let method = method.try_into()?;

        log::debug!("Creating payment processor for method: {method}");

        let constructor = PLATFORMS
            .iter()
            .find(|(registered, _)| *registered == method)
            .map(|(_, constructor)| constructor)
            .ok_or(DispatchError::UnsupportedMethod(method))?;

        return Ok(constructor());
    }
}
