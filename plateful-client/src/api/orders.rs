//! Order endpoints (bearer auth required)

use crate::error::ClientResult;
use crate::gateway::ResourceGateway;
use crate::http::HttpClient;
use async_trait::async_trait;
use shared::models::OrderStatusUpdate;
use shared::{Order, OrderStatus};

const LIST_PATH: &str = "api/orders";

/// Order endpoints: list, status update, delete
#[derive(Debug, Clone)]
pub struct OrderApi {
    http: HttpClient,
}

impl OrderApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ResourceGateway<Order> for OrderApi {
    async fn list(&self) -> ClientResult<Vec<Order>> {
        self.http.get_list(LIST_PATH, "failed to load orders").await
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http
            .delete_ack(&format!("{LIST_PATH}/{id}"), "failed to delete order")
            .await
    }

    async fn patch(&self, id: &str, patch: &OrderStatus) -> ClientResult<()> {
        let body = OrderStatusUpdate { status: *patch };
        self.http
            .put_ack(
                &format!("{LIST_PATH}/{id}"),
                &body,
                "failed to update order status",
            )
            .await
    }
}
