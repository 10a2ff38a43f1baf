//! Order Model

use serde::{Deserialize, Serialize};

/// Order lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

/// One ordered line item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    /// Unit price in currency unit, absent on older records
    #[serde(default)]
    pub price: Option<f64>,
}

/// Order entity
///
/// Created by the storefront, never by this console. The console mutates
/// `status` in place and deletes whole orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Total amount in currency unit
    pub total: f64,
    /// Free text from the storefront; classified at render time
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Order {
    /// Total number of ordered units across all line items
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// "Margherita x2; Coke x1" style summary for exports
    pub fn item_summary(&self) -> String {
        self.items
            .iter()
            .map(|i| format!("{} x{}", i.name, i.quantity))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Status update payload (PUT body)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Delivered).unwrap(),
            "\"delivered\""
        );
        let status: OrderStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, OrderStatus::Cancelled);
    }

    #[test]
    fn order_tolerates_missing_optional_fields() {
        let order: Order = serde_json::from_str(
            r#"{"_id":"o1","total":21.5,"items":[{"name":"Margherita","quantity":2}]}"#,
        )
        .unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.item_summary(), "Margherita x2");
        assert!(order.created_at.is_none());
        assert!(order.items[0].price.is_none());
    }
}
