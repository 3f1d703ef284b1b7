use crate::dispatcher::DispatchError;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of supported payment methods, used as the dispatch key.
///
/// The canonical string forms are the lowercase-with-underscore names accepted
/// by the dispatcher and by the demo input files.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    #[serde(rename = "paypal")]
    PayPal,
    BankTransfer,
    DigitalWallet,
}

impl PaymentMethod {
    pub const ALL: [Self; 4] = [
        Self::CreditCard,
        Self::PayPal,
        Self::BankTransfer,
        Self::DigitalWallet,
    ];

    pub fn as_str(&self) -> &'static str {
        return match self {
            Self::CreditCard => "credit_card",
            Self::PayPal => "paypal",
            Self::BankTransfer => "bank_transfer",
            Self::DigitalWallet => "digital_wallet",
        };
    }

    /// Header used on receipts, followed by the word "Receipt".
    pub fn display_name(&self) -> &'static str {
        return match self {
            Self::CreditCard => "Credit Card Payment",
            Self::PayPal => "PayPal Payment",
            Self::BankTransfer => "Bank Transfer",
            Self::DigitalWallet => "Digital Wallet Payment",
        };
    }

    /// Two-letter tag prefixed to transaction ids.
    pub fn tag(&self) -> &'static str {
        return match self {
            Self::CreditCard => "CC",
            Self::PayPal => "PP",
            Self::BankTransfer => "BT",
            Self::DigitalWallet => "DW",
        };
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.as_str());
    }
}

impl FromStr for PaymentMethod {
    type Err = DispatchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        return Self::ALL
            .into_iter()
            .find(|method| method.as_str() == value)
            .ok_or_else(|| DispatchError::InvalidMethod(value.to_string()));
    }
}

impl TryFrom<&str> for PaymentMethod {
    type Error = DispatchError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        return value.parse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_strings_round_trip() {
        for method in PaymentMethod::ALL {
            assert_eq!(method.as_str().parse::<PaymentMethod>(), Ok(method));
        }
    }

    #[test]
    fn rejects_non_canonical_strings() {
        assert!("CREDIT_CARD".parse::<PaymentMethod>().is_err());
        assert!("credit card".parse::<PaymentMethod>().is_err());
        assert!("".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn tags_are_distinct() {
        let tags: std::collections::HashSet<&str> =
            PaymentMethod::ALL.iter().map(|method| method.tag()).collect();
        assert_eq!(tags.len(), PaymentMethod::ALL.len());
    }
}
