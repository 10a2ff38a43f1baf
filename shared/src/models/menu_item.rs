//! Menu Item Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Menu category
///
/// Unknown wire values decode as `Other` so one unrecognized record cannot
/// poison a whole list fetch.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub enum Category {
    Pizza,
    Burger,
    Drinks,
    Dessert,
    #[default]
    Other,
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "Pizza" => Category::Pizza,
            "Burger" => Category::Burger,
            "Drinks" => Category::Drinks,
            "Dessert" => Category::Dessert,
            _ => Category::Other,
        })
    }
}

impl Category {
    /// All categories in menu-form order
    pub const ALL: [Category; 5] = [
        Category::Pizza,
        Category::Burger,
        Category::Drinks,
        Category::Dessert,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Pizza => "Pizza",
            Category::Burger => "Burger",
            Category::Drinks => "Drinks",
            Category::Dessert => "Dessert",
            Category::Other => "Other",
        }
    }
}

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    /// Price in currency unit
    pub price: f64,
    /// Star rating, 0-5
    #[serde(default)]
    pub rating: u8,
    /// Order count used for ranking
    #[serde(default)]
    pub popularity: u32,
    /// Image reference (filename or URL), absent for items without a photo
    #[serde(default)]
    pub image: Option<String>,
}

/// Add-item form payload, validated before it is submitted as multipart
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MenuItemDraft {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    /// Price in currency unit, must be positive
    #[validate(range(min = 0.01, message = "price must be positive"))]
    pub price: f64,
    #[validate(range(max = 5, message = "rating is 0-5"))]
    pub rating: u8,
}

impl MenuItemDraft {
    pub fn new(name: impl Into<String>, category: Category, price: f64) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            category,
            price,
            rating: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn unknown_category_decodes_as_other() {
        let item: MenuItem = serde_json::from_str(
            r#"{"_id":"m1","name":"Falafel Wrap","category":"Wraps","price":6.5}"#,
        )
        .unwrap();
        assert_eq!(item.category, Category::Other);
        assert_eq!(item.id, "m1");
        assert!(item.image.is_none());
    }

    #[test]
    fn draft_rejects_non_positive_price() {
        let draft = MenuItemDraft::new("Margherita", Category::Pizza, 0.0);
        assert!(draft.validate().is_err());

        let draft = MenuItemDraft::new("Margherita", Category::Pizza, 8.99);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn draft_rejects_blank_name_and_high_rating() {
        let draft = MenuItemDraft::new("", Category::Dessert, 3.0);
        assert!(draft.validate().is_err());

        let mut draft = MenuItemDraft::new("Tiramisu", Category::Dessert, 3.0);
        draft.rating = 6;
        assert!(draft.validate().is_err());
    }
}
