//! Contact message endpoints (no auth required)

use crate::error::ClientResult;
use crate::gateway::ResourceGateway;
use crate::http::HttpClient;
use async_trait::async_trait;
use shared::ContactMessage;

const LIST_PATH: &str = "api/contacts";

/// Contact message endpoints: list, delete
#[derive(Debug, Clone)]
pub struct ContactApi {
    http: HttpClient,
}

impl ContactApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ResourceGateway<ContactMessage> for ContactApi {
    async fn list(&self) -> ClientResult<Vec<ContactMessage>> {
        self.http
            .get_list(LIST_PATH, "failed to load contact messages")
            .await
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http
            .delete_ack(
                &format!("{LIST_PATH}/{id}"),
                "failed to delete contact message",
            )
            .await
    }
}
