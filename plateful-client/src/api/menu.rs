//! Menu item endpoints

use crate::error::ClientResult;
use crate::gateway::ResourceGateway;
use crate::http::HttpClient;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use shared::{MenuItem, MenuItemDraft};

const LIST_PATH: &str = "api/menu";

/// Image file attached to an add-item submission
#[derive(Debug, Clone)]
pub struct ImagePart {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Menu item endpoints: list, multipart create, delete
#[derive(Debug, Clone)]
pub struct MenuApi {
    http: HttpClient,
}

impl MenuApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Create a menu item via multipart form, with an optional image part
    pub async fn create(&self, draft: &MenuItemDraft, image: Option<ImagePart>) -> ClientResult<()> {
        let mut form = Form::new()
            .text("name", draft.name.clone())
            .text("description", draft.description.clone())
            .text("category", draft.category.as_str())
            .text("price", draft.price.to_string())
            .text("rating", draft.rating.to_string());

        if let Some(image) = image {
            form = form.part("image", Part::bytes(image.bytes).file_name(image.file_name));
        }

        self.http
            .post_multipart_ack(LIST_PATH, form, "failed to add menu item")
            .await
    }
}

#[async_trait]
impl ResourceGateway<MenuItem> for MenuApi {
    async fn list(&self) -> ClientResult<Vec<MenuItem>> {
        self.http
            .get_list(LIST_PATH, "failed to load menu items")
            .await
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http
            .delete_ack(&format!("{LIST_PATH}/{id}"), "failed to delete menu item")
            .await
    }
}
