//! Contact Message Model

use serde::{Deserialize, Serialize};

/// Contact-form submission
///
/// Created by the public storefront form; this console only lists and
/// deletes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, alias = "name")]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    /// Dish the visitor asked about, if any
    #[serde(default)]
    pub dish_name: Option<String>,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_name_alias_and_missing_dish() {
        let msg: ContactMessage = serde_json::from_str(
            r#"{"_id":"c1","name":"Ada Lovelace","email":"ada@example.com","query":"Do you cater?"}"#,
        )
        .unwrap();
        assert_eq!(msg.full_name, "Ada Lovelace");
        assert!(msg.dish_name.is_none());
    }
}
