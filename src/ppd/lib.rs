pub mod dispatcher;
pub mod ids;
pub mod input;
pub mod models;
pub mod processors;
mod fields;
mod method;
mod result;

pub use fields::{FieldValue, PaymentInput};
pub use method::PaymentMethod;
pub use result::Result;

pub use dispatcher::{DispatchError, Dispatcher};
pub use models::{PaymentReport, PaymentResult};
pub use processors::PaymentProcessor;

/// Resolves a payment method (enumeration value or canonical string form) to a
/// ready-to-use processor.
pub fn create_payment_method<M>(method: M) -> Result<Box<dyn PaymentProcessor>>
where
    M: TryInto<PaymentMethod>,
    M::Error: std::error::Error + Send + Sync + 'static,
{
    return Dispatcher::create_payment_method(method);
}
