use crate::method::PaymentMethod;

use serde::{Deserialize, Serialize};

/// One row of the CLI summary report. Rejected payments keep their row with
/// `accepted = false`, no transaction id, and a zero commission.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PaymentReport {
    pub method: PaymentMethod,
    pub accepted: bool,
    pub transaction_id: Option<String>,
    pub amount: f64,
    pub commission: f64,
}
