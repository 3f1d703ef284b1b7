use crate::fields::PaymentInput;
use crate::method::PaymentMethod;

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Best-effort identifier for a simulated payment: a method tag plus a content
/// hash of the input. Equal inputs produce equal identifiers across runs and
/// platforms; collisions are possible in principle and not guarded against.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn derive(method: PaymentMethod, input: &PaymentInput) -> Self {
        let digest = Sha256::digest(input.canonical().as_bytes());
        let hash: String = digest[..8]
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect();

        return Self(format!("{}-{}", method.tag(), hash));
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
