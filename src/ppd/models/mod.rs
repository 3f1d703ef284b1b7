mod payment_result;
mod report;

pub use payment_result::PaymentResult;
pub use report::PaymentReport;
