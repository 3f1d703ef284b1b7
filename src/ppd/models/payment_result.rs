use crate::ids::TransactionId;

use serde::Serialize;

/// Outcome of one simulated payment execution. Created fresh per call and
/// never mutated afterwards; owned solely by the caller.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PaymentResult {
    pub success: bool,
    pub transaction_id: TransactionId,
    pub amount: f64,
}
