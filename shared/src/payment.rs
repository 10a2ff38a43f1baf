//! Payment method classification
//!
//! The storefront stores the payment method as free text. The console
//! classifies it at render time; nothing is ever written back.

use serde::{Deserialize, Serialize};

/// Render-time payment bucket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentKind {
    Cod,
    Online,
    Pending,
}

impl PaymentKind {
    /// Classify free-text payment method
    ///
    /// Blank and unrecognized text both land in `Pending`: unknown text is
    /// treated as not-yet-settled rather than guessed as paid.
    pub fn classify(raw: &str) -> PaymentKind {
        let method = raw.trim().to_lowercase();
        if method.is_empty() {
            return PaymentKind::Pending;
        }
        if method.contains("cod") || method.contains("cash") {
            return PaymentKind::Cod;
        }
        const ONLINE_MARKERS: [&str; 5] = ["online", "card", "upi", "wallet", "net"];
        if ONLINE_MARKERS.iter().any(|m| method.contains(m)) {
            return PaymentKind::Online;
        }
        PaymentKind::Pending
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentKind::Cod => "COD",
            PaymentKind::Online => "Online",
            PaymentKind::Pending => "Pending",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_cod_variants() {
        assert_eq!(PaymentKind::classify("COD"), PaymentKind::Cod);
        assert_eq!(PaymentKind::classify("Cash on Delivery"), PaymentKind::Cod);
    }

    #[test]
    fn classifies_online_variants() {
        assert_eq!(PaymentKind::classify("Online"), PaymentKind::Online);
        assert_eq!(PaymentKind::classify("credit card"), PaymentKind::Online);
        assert_eq!(PaymentKind::classify("UPI"), PaymentKind::Online);
    }

    #[test]
    fn blank_and_unknown_are_pending() {
        assert_eq!(PaymentKind::classify(""), PaymentKind::Pending);
        assert_eq!(PaymentKind::classify("   "), PaymentKind::Pending);
        assert_eq!(PaymentKind::classify("barter"), PaymentKind::Pending);
    }
}
