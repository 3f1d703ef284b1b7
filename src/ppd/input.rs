use crate::fields::PaymentInput;
use crate::method::PaymentMethod;
use crate::Result;

use serde::Deserialize;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing input record: amount is not a number: {0:?}")]
    BadAmount(String),
}

/// Represents one row of the demo input file. Every known field has its own
/// column; empty cells deserialize to `None` and are treated as absent fields.
#[derive(Deserialize, Debug, Clone)]
pub struct InputRecord {
    pub method: String,

    pub card_number: Option<String>,
    pub expiry_date: Option<String>,
    pub cvv: Option<String>,

    pub email: Option<String>,
    pub password: Option<String>,

    pub account_number: Option<String>,
    pub routing_number: Option<String>,
    pub account_holder: Option<String>,

    pub wallet_id: Option<String>,
    pub phone_number: Option<String>,

    pub amount: Option<String>,
}

impl InputRecord {
    /// Resolves the method column and folds the populated cells into a payment
    /// field map.
    pub fn parse_payment(self) -> Result<(PaymentMethod, PaymentInput)> {
        let method: PaymentMethod = self.method.parse()?;

        let mut input = PaymentInput::new();

        let text_fields = [
            ("card_number", &self.card_number),
            ("expiry_date", &self.expiry_date),
            ("cvv", &self.cvv),
            ("email", &self.email),
            ("password", &self.password),
            ("account_number", &self.account_number),
            ("routing_number", &self.routing_number),
            ("account_holder", &self.account_holder),
            ("wallet_id", &self.wallet_id),
            ("phone_number", &self.phone_number),
        ];

        for (field, value) in text_fields {
            if let Some(value) = value {
                input.insert_text(field, value);
            }
        }

        if let Some(amount) = &self.amount {
            let amount: f64 = amount
                .parse()
                .map_err(|_| InputParseError::BadAmount(amount.clone()))?;
            input.insert_number("amount", amount);
        }

        return Ok((method, input));
    }
}
