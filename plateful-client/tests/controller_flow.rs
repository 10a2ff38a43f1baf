// plateful-client/tests/controller_flow.rs
// Controller behavior against a scripted, recording gateway.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use plateful_client::{
    AdminRecord, ClientError, ClientResult, ResourceController, ResourceGateway, TableBody,
};
use shared::models::OrderItem;
use shared::{Order, OrderStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    List,
    Delete(String),
    Patch(String, String),
}

/// Scripted gateway: queued results per operation, every call recorded.
struct MockGateway<T: AdminRecord> {
    lists: Mutex<VecDeque<ClientResult<Vec<T>>>>,
    deletes: Mutex<VecDeque<ClientResult<()>>>,
    patches: Mutex<VecDeque<ClientResult<()>>>,
    calls: Mutex<Vec<Call>>,
    hang_list: bool,
}

impl<T: AdminRecord> MockGateway<T> {
    fn new() -> Self {
        Self {
            lists: Mutex::new(VecDeque::new()),
            deletes: Mutex::new(VecDeque::new()),
            patches: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            hang_list: false,
        }
    }

    fn with_list(self, result: ClientResult<Vec<T>>) -> Self {
        self.lists.lock().unwrap().push_back(result);
        self
    }

    fn with_delete(self, result: ClientResult<()>) -> Self {
        self.deletes.lock().unwrap().push_back(result);
        self
    }

    fn with_patch(self, result: ClientResult<()>) -> Self {
        self.patches.lock().unwrap().push_back(result);
        self
    }

    fn hanging() -> Self {
        Self {
            hang_list: true,
            ..Self::new()
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl<T: AdminRecord> ResourceGateway<T> for MockGateway<T> {
    async fn list(&self) -> ClientResult<Vec<T>> {
        self.calls.lock().unwrap().push(Call::List);
        if self.hang_list {
            std::future::pending::<()>().await;
        }
        self.lists
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        self.calls.lock().unwrap().push(Call::Delete(id.to_string()));
        self.deletes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }

    async fn patch(&self, id: &str, patch: &T::Patch) -> ClientResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Patch(id.to_string(), format!("{patch:?}")));
        self.patches
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }
}

fn order(id: &str, status: OrderStatus) -> Order {
    Order {
        id: id.to_string(),
        email: format!("{id}@example.com"),
        phone: "555-0101".to_string(),
        address: "1 Main St".to_string(),
        city: "Springfield".to_string(),
        zip: "12345".to_string(),
        items: vec![OrderItem {
            name: "Margherita".to_string(),
            quantity: 2,
            price: Some(8.5),
        }],
        total: 17.0,
        payment_method: "COD".to_string(),
        status,
        created_at: None,
    }
}

fn three_orders() -> Vec<Order> {
    vec![
        order("o1", OrderStatus::Pending),
        order("o2", OrderStatus::Pending),
        order("o3", OrderStatus::Pending),
    ]
}

#[tokio::test]
async fn construction_state_before_fetch_resolves() {
    let gateway = Arc::new(MockGateway::hanging());
    let controller = ResourceController::<Order>::new(gateway);

    assert!(controller.is_loading());
    assert!(controller.error().is_none());
    assert!(controller.records().is_empty());
    assert!(matches!(controller.rows(), TableBody::Loading));
}

#[tokio::test]
async fn successful_fetch_renders_one_row_per_record() {
    let gateway = Arc::new(MockGateway::new().with_list(Ok(three_orders())));
    let mut controller = ResourceController::new(gateway.clone());
    controller.pump().await;

    assert!(!controller.is_loading());
    assert!(controller.error().is_none());
    match controller.rows() {
        TableBody::Rows(rows) => assert_eq!(rows.len(), 3),
        other => panic!("expected rows, got {other:?}"),
    }
    assert_eq!(gateway.calls(), vec![Call::List]);
}

#[tokio::test]
async fn failed_first_fetch_shows_error_row_and_empty_collection() {
    let gateway = Arc::new(
        MockGateway::<Order>::new().with_list(Err(ClientError::MalformedBody)),
    );
    let mut controller = ResourceController::new(gateway);
    controller.pump().await;

    assert!(controller.records().is_empty());
    match controller.rows() {
        TableBody::Error(message) => {
            assert_eq!(message, "response is not valid structured data")
        }
        other => panic!("expected error row, got {other:?}"),
    }
}

#[tokio::test]
async fn failed_refresh_keeps_previous_collection() {
    let gateway = Arc::new(
        MockGateway::new()
            .with_list(Ok(three_orders()))
            .with_list(Err(ClientError::Rejected("backend down".to_string()))),
    );
    let mut controller = ResourceController::new(gateway.clone());
    controller.pump().await;
    assert_eq!(controller.records().len(), 3);

    controller.refresh();
    assert!(matches!(controller.rows(), TableBody::Loading));
    controller.pump().await;

    assert!(matches!(controller.rows(), TableBody::Error("backend down")));
    assert_eq!(controller.records().len(), 3, "collection unchanged");
}

#[tokio::test]
async fn declined_confirmation_makes_no_network_call() {
    let gateway = Arc::new(MockGateway::new().with_list(Ok(three_orders())));
    let mut controller = ResourceController::new(gateway.clone());
    controller.pump().await;

    assert!(controller.begin_delete("o2"));
    assert_eq!(controller.pending_delete(), Some("o2"));
    controller.cancel_delete();
    assert!(controller.pending_delete().is_none());

    assert_eq!(controller.records().len(), 3);
    assert_eq!(gateway.calls(), vec![Call::List], "no delete was issued");
}

#[tokio::test]
async fn confirmed_delete_removes_exactly_that_record() {
    let gateway = Arc::new(MockGateway::new().with_list(Ok(three_orders())));
    let mut controller = ResourceController::new(gateway.clone());
    controller.pump().await;

    controller.begin_delete("o2");
    controller.confirm_delete();
    controller.pump().await;

    assert_eq!(controller.records().len(), 2);
    assert!(controller.records().iter().all(|o| o.id != "o2"));
    assert!(controller.take_notice().is_none());
    assert_eq!(
        gateway.calls(),
        vec![Call::List, Call::Delete("o2".to_string())]
    );
}

#[tokio::test]
async fn deleting_an_already_removed_id_still_hits_the_server() {
    let gateway = Arc::new(
        MockGateway::new()
            .with_list(Ok(three_orders()))
            .with_delete(Ok(()))
            .with_delete(Err(ClientError::Rejected("No such order".to_string()))),
    );
    let mut controller = ResourceController::new(gateway.clone());
    controller.pump().await;

    controller.begin_delete("o2");
    controller.confirm_delete();
    controller.pump().await;
    assert_eq!(controller.records().len(), 2);

    // Same id again: not short-circuited locally, fails per server contract
    controller.begin_delete("o2");
    controller.confirm_delete();
    controller.pump().await;

    assert_eq!(
        gateway.calls(),
        vec![
            Call::List,
            Call::Delete("o2".to_string()),
            Call::Delete("o2".to_string()),
        ]
    );
    assert_eq!(controller.take_notice().as_deref(), Some("No such order"));
    assert_eq!(controller.records().len(), 2, "collection untouched");
}

#[tokio::test]
async fn failed_delete_raises_notice_not_inline_error() {
    let gateway = Arc::new(
        MockGateway::new()
            .with_list(Ok(three_orders()))
            .with_delete(Err(ClientError::Unauthorized)),
    );
    let mut controller = ResourceController::new(gateway);
    controller.pump().await;

    controller.begin_delete("o1");
    controller.confirm_delete();
    controller.pump().await;

    assert_eq!(controller.records().len(), 3, "stale-but-correct rows kept");
    assert!(controller.error().is_none(), "inline error untouched");
    assert_eq!(
        controller.take_notice().as_deref(),
        Some("authentication required")
    );
    assert!(controller.take_notice().is_none(), "notice is one-shot");
}

#[tokio::test]
async fn status_update_patches_only_the_status_field() {
    let gateway = Arc::new(MockGateway::new().with_list(Ok(three_orders())));
    let mut controller = ResourceController::new(gateway.clone());
    controller.pump().await;

    let before = controller.records()[0].clone();
    controller.request_patch("o1", OrderStatus::Delivered);
    controller.pump().await;

    let after = &controller.records()[0];
    assert_eq!(after.status, OrderStatus::Delivered);
    assert_eq!(after.email, before.email);
    assert_eq!(after.total, before.total);
    assert_eq!(after.items.len(), before.items.len());
    assert_eq!(
        gateway.calls(),
        vec![Call::List, Call::Patch("o1".to_string(), "Delivered".to_string())]
    );
}

#[tokio::test]
async fn failed_status_update_leaves_state_untouched() {
    let gateway = Arc::new(
        MockGateway::new()
            .with_list(Ok(three_orders()))
            .with_patch(Err(ClientError::Rejected("stale order".to_string()))),
    );
    let mut controller = ResourceController::new(gateway);
    controller.pump().await;

    controller.request_patch("o1", OrderStatus::Cancelled);
    controller.pump().await;

    assert_eq!(controller.records()[0].status, OrderStatus::Pending);
    assert_eq!(controller.take_notice().as_deref(), Some("stale order"));
}

#[tokio::test]
async fn mutations_before_first_load_are_rejected() {
    let gateway = Arc::new(MockGateway::<Order>::hanging());
    let mut controller = ResourceController::new(gateway.clone());
    tokio::task::yield_now().await; // let the initial fetch start (and hang)

    assert!(!controller.begin_delete("o1"));
    assert!(controller.take_notice().is_some());

    controller.request_patch("o1", OrderStatus::Delivered);
    assert!(controller.take_notice().is_some());

    assert_eq!(gateway.calls(), vec![Call::List], "only the initial fetch");
}

#[tokio::test]
async fn order_board_scenario_update_then_delete() {
    // 3 orders; one becomes cancelled, one is deleted; 2 rows remain and the
    // cancelled one keeps its new status.
    let gateway = Arc::new(MockGateway::new().with_list(Ok(three_orders())));
    let mut controller = ResourceController::new(gateway);
    controller.pump().await;

    controller.request_patch("o2", OrderStatus::Cancelled);
    controller.pump().await;

    controller.begin_delete("o3");
    controller.confirm_delete();
    controller.pump().await;

    match controller.rows() {
        TableBody::Rows(rows) => {
            assert_eq!(rows.len(), 2);
            let cancelled = rows.iter().find(|o| o.id == "o2").unwrap();
            assert_eq!(cancelled.status, OrderStatus::Cancelled);
            assert_eq!(cancelled.status.as_str(), "Cancelled");
        }
        other => panic!("expected rows, got {other:?}"),
    }
}

#[tokio::test]
async fn teardown_cancels_the_in_flight_fetch() {
    let gateway = Arc::new(MockGateway::<Order>::hanging());
    let controller = ResourceController::new(gateway.clone());
    assert_eq!(gateway.calls(), vec![]); // spawn may not have run yet
    tokio::task::yield_now().await;
    drop(controller);

    // The hung fetch is abandoned; nothing deadlocks and nothing panics.
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    assert_eq!(gateway.calls(), vec![Call::List]);
}
