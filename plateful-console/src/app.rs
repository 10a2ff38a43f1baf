//! Console application state
//!
//! Three resource controllers (one per tab), modal state for the blocking
//! confirmation / notice prompts, and the add-item form. All network work
//! happens inside the controllers or a spawned create task; key handling
//! and polling never block the UI loop.

use std::path::PathBuf;
use std::sync::Arc;

use crossterm::event::{Event, KeyCode, KeyEvent};
use plateful_client::error::user_message;
use plateful_client::{ContactApi, ImagePart, MenuApi, OrderApi, ResourceController};
use ratatui::widgets::TableState;
use shared::{Category, ContactMessage, MenuItem, MenuItemDraft, Order, OrderStatus};
use tokio::sync::mpsc;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;
use tui_logger::{TuiWidgetEvent, TuiWidgetState};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::download;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Menu,
    Orders,
    Contacts,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Menu, Tab::Orders, Tab::Contacts];

    pub fn index(&self) -> usize {
        match self {
            Tab::Menu => 0,
            Tab::Orders => 1,
            Tab::Contacts => 2,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Menu => "Menu Items",
            Tab::Orders => "Orders",
            Tab::Contacts => "Contacts",
        }
    }

    fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    fn prev(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// Modal state; Normal is the browsable table view
pub enum Mode {
    Normal,
    /// Blocking yes/no prompt; the target id lives in the active
    /// controller's pending-delete slot, the label is for display
    ConfirmDelete(String),
    /// One-shot blocking notice, dismissed by any key
    Notice(String),
    AddItem(AddItemForm),
}

/// Completion events from work the controllers do not own (item creation)
enum AppEvent {
    ItemCreated,
    CreateFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    Category,
    Price,
    Rating,
    ImagePath,
}

impl FormField {
    const ORDER: [FormField; 6] = [
        FormField::Name,
        FormField::Description,
        FormField::Category,
        FormField::Price,
        FormField::Rating,
        FormField::ImagePath,
    ];
}

/// Add-item form state
pub struct AddItemForm {
    pub focus: FormField,
    pub name: Input,
    pub description: Input,
    pub category_idx: usize,
    pub price: Input,
    pub rating: Input,
    pub image_path: Input,
    pub error: Option<String>,
}

impl Default for AddItemForm {
    fn default() -> Self {
        Self {
            focus: FormField::Name,
            name: Input::default(),
            description: Input::default(),
            category_idx: 0,
            price: Input::default(),
            rating: Input::default(),
            image_path: Input::default(),
            error: None,
        }
    }
}

impl AddItemForm {
    pub fn category(&self) -> Category {
        Category::ALL[self.category_idx]
    }

    fn focus_next(&mut self) {
        let idx = FormField::ORDER.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = FormField::ORDER[(idx + 1) % FormField::ORDER.len()];
    }

    fn focus_prev(&mut self) {
        let idx = FormField::ORDER.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = FormField::ORDER[(idx + FormField::ORDER.len() - 1) % FormField::ORDER.len()];
    }

    fn category_next(&mut self) {
        self.category_idx = (self.category_idx + 1) % Category::ALL.len();
    }

    fn category_prev(&mut self) {
        self.category_idx = (self.category_idx + Category::ALL.len() - 1) % Category::ALL.len();
    }

    fn handle_edit(&mut self, key: KeyEvent) {
        let event = Event::Key(key);
        match self.focus {
            FormField::Name => {
                self.name.handle_event(&event);
            }
            FormField::Description => {
                self.description.handle_event(&event);
            }
            FormField::Category => {}
            FormField::Price => {
                self.price.handle_event(&event);
            }
            FormField::Rating => {
                self.rating.handle_event(&event);
            }
            FormField::ImagePath => {
                self.image_path.handle_event(&event);
            }
        }
    }

    /// Parse and validate the form into a submission
    pub fn build(&self) -> Result<(MenuItemDraft, Option<ImagePart>), String> {
        let price: f64 = self
            .price
            .value()
            .trim()
            .parse()
            .map_err(|_| "price must be a number".to_string())?;

        let rating_raw = self.rating.value().trim();
        let rating: u8 = if rating_raw.is_empty() {
            0
        } else {
            rating_raw
                .parse()
                .map_err(|_| "rating must be a whole number 0-5".to_string())?
        };

        let draft = MenuItemDraft {
            name: self.name.value().trim().to_string(),
            description: self.description.value().trim().to_string(),
            category: self.category(),
            price,
            rating,
        };
        draft
            .validate()
            .map_err(|errors| first_validation_message(&errors))?;

        let path = self.image_path.value().trim();
        let image = if path.is_empty() {
            None
        } else {
            let bytes = std::fs::read(path)
                .map_err(|error| format!("could not read image {path}: {error}"))?;
            let file_name = std::path::Path::new(path)
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("image")
                .to_string();
            Some(ImagePart { file_name, bytes })
        };

        Ok((draft, image))
    }
}

fn first_validation_message(errors: &ValidationErrors) -> String {
    errors
        .errors()
        .values()
        .filter_map(|kind| match kind {
            ValidationErrorsKind::Field(list) => list.first(),
            _ => None,
        })
        .filter_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .next()
        .unwrap_or_else(|| "invalid input".to_string())
}

pub struct App {
    pub tab: Tab,
    pub mode: Mode,
    pub menu: ResourceController<MenuItem>,
    pub orders: ResourceController<Order>,
    pub contacts: ResourceController<ContactMessage>,
    pub menu_table: TableState,
    pub orders_table: TableState,
    pub contacts_table: TableState,
    pub logger_state: TuiWidgetState,
    pub should_quit: bool,
    menu_api: MenuApi,
    export_dir: PathBuf,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl App {
    /// Must be constructed inside the tokio runtime: each controller spawns
    /// its initial fetch immediately.
    pub fn new(
        menu_api: MenuApi,
        order_api: OrderApi,
        contact_api: ContactApi,
        export_dir: PathBuf,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            tab: Tab::Menu,
            mode: Mode::Normal,
            menu: ResourceController::new(Arc::new(menu_api.clone())),
            orders: ResourceController::new(Arc::new(order_api)),
            contacts: ResourceController::new(Arc::new(contact_api)),
            menu_table: TableState::default(),
            orders_table: TableState::default(),
            contacts_table: TableState::default(),
            logger_state: TuiWidgetState::new(),
            should_quit: false,
            menu_api,
            export_dir,
            events_tx,
            events_rx,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        match self.mode {
            Mode::Normal => self.on_key_normal(key),
            Mode::ConfirmDelete(_) => self.on_key_confirm(key),
            Mode::Notice(_) => self.mode = Mode::Normal,
            Mode::AddItem(_) => self.on_key_add_item(key),
        }
    }

    fn on_key_normal(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab | KeyCode::Right => self.tab = self.tab.next(),
            KeyCode::BackTab | KeyCode::Left => self.tab = self.tab.prev(),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Char('r') => self.refresh_active(),
            KeyCode::Char('d') => self.begin_delete_selected(),
            KeyCode::Char('x') => self.export_active(),
            KeyCode::Char('a') if self.tab == Tab::Menu => {
                self.mode = Mode::AddItem(AddItemForm::default());
            }
            KeyCode::Char('1') if self.tab == Tab::Orders => {
                self.set_status_selected(OrderStatus::Pending);
            }
            KeyCode::Char('2') if self.tab == Tab::Orders => {
                self.set_status_selected(OrderStatus::Delivered);
            }
            KeyCode::Char('3') if self.tab == Tab::Orders => {
                self.set_status_selected(OrderStatus::Cancelled);
            }
            KeyCode::PageUp => self.logger_state.transition(TuiWidgetEvent::PrevPageKey),
            KeyCode::PageDown => self.logger_state.transition(TuiWidgetEvent::NextPageKey),
            _ => {}
        }
    }

    fn on_key_confirm(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                match self.tab {
                    Tab::Menu => self.menu.confirm_delete(),
                    Tab::Orders => self.orders.confirm_delete(),
                    Tab::Contacts => self.contacts.confirm_delete(),
                }
                self.mode = Mode::Normal;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                match self.tab {
                    Tab::Menu => self.menu.cancel_delete(),
                    Tab::Orders => self.orders.cancel_delete(),
                    Tab::Contacts => self.contacts.cancel_delete(),
                }
                self.mode = Mode::Normal;
            }
            _ => {}
        }
    }

    fn on_key_add_item(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                return;
            }
            KeyCode::Enter => {
                self.submit_add_item();
                return;
            }
            _ => {}
        }

        let Mode::AddItem(form) = &mut self.mode else {
            return;
        };
        match key.code {
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            KeyCode::Left if form.focus == FormField::Category => form.category_prev(),
            KeyCode::Right if form.focus == FormField::Category => form.category_next(),
            _ => form.handle_edit(key),
        }
    }

    fn submit_add_item(&mut self) {
        let Mode::AddItem(form) = &mut self.mode else {
            return;
        };
        match form.build() {
            Err(message) => form.error = Some(message),
            Ok((draft, image)) => {
                tracing::info!(name = %draft.name, "submitting menu item");
                let api = self.menu_api.clone();
                let tx = self.events_tx.clone();
                tokio::spawn(async move {
                    let event = match api.create(&draft, image).await {
                        Ok(()) => AppEvent::ItemCreated,
                        Err(error) => AppEvent::CreateFailed(user_message(&error)),
                    };
                    let _ = tx.send(event);
                });
                self.mode = Mode::Normal;
            }
        }
    }

    /// Apply completed controller events and app-level events; promote
    /// pending notices into the blocking modal
    pub fn poll(&mut self) {
        self.menu.poll();
        self.orders.poll();
        self.contacts.poll();

        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                AppEvent::ItemCreated => {
                    tracing::info!("menu item added");
                    self.menu.refresh();
                    if matches!(self.mode, Mode::Normal) {
                        self.mode = Mode::Notice("Menu item added".to_string());
                    }
                }
                AppEvent::CreateFailed(message) => self.mode = Mode::Notice(message),
            }
        }

        if matches!(self.mode, Mode::Normal)
            && let Some(notice) = self
                .menu
                .take_notice()
                .or_else(|| self.orders.take_notice())
                .or_else(|| self.contacts.take_notice())
        {
            self.mode = Mode::Notice(notice);
        }

        self.clamp_selections();
    }

    fn refresh_active(&mut self) {
        match self.tab {
            Tab::Menu => self.menu.refresh(),
            Tab::Orders => self.orders.refresh(),
            Tab::Contacts => self.contacts.refresh(),
        }
    }

    fn begin_delete_selected(&mut self) {
        match self.tab {
            Tab::Menu => {
                let Some(record) = selected(&self.menu_table, self.menu.records()) else {
                    return;
                };
                let (id, label) = (record.id.clone(), record.name.clone());
                if self.menu.begin_delete(&id) {
                    self.mode = Mode::ConfirmDelete(label);
                }
            }
            Tab::Orders => {
                let Some(record) = selected(&self.orders_table, self.orders.records()) else {
                    return;
                };
                let (id, label) = (record.id.clone(), format!("order from {}", record.email));
                if self.orders.begin_delete(&id) {
                    self.mode = Mode::ConfirmDelete(label);
                }
            }
            Tab::Contacts => {
                let Some(record) = selected(&self.contacts_table, self.contacts.records()) else {
                    return;
                };
                let (id, label) = (record.id.clone(), format!("message from {}", record.full_name));
                if self.contacts.begin_delete(&id) {
                    self.mode = Mode::ConfirmDelete(label);
                }
            }
        }
    }

    fn set_status_selected(&mut self, status: OrderStatus) {
        let Some(record) = selected(&self.orders_table, self.orders.records()) else {
            return;
        };
        let id = record.id.clone();
        self.orders.request_patch(&id, status);
    }

    fn export_active(&mut self) {
        let result = match self.tab {
            Tab::Menu => self.menu.export(),
            Tab::Orders => self.orders.export(),
            Tab::Contacts => self.contacts.export(),
        };
        match result {
            Ok(artifact) => match download::save(&artifact, &self.export_dir) {
                Ok(path) => {
                    tracing::info!(rows = artifact.row_count, path = %path.display(), "report exported");
                    self.mode = Mode::Notice(format!(
                        "Exported {} rows to {}",
                        artifact.row_count,
                        path.display()
                    ));
                }
                Err(error) => self.mode = Mode::Notice(format!("export failed: {error}")),
            },
            Err(error) => self.mode = Mode::Notice(user_message(&error)),
        }
    }

    fn active_len(&self) -> usize {
        match self.tab {
            Tab::Menu => self.menu.records().len(),
            Tab::Orders => self.orders.records().len(),
            Tab::Contacts => self.contacts.records().len(),
        }
    }

    fn active_table_mut(&mut self) -> &mut TableState {
        match self.tab {
            Tab::Menu => &mut self.menu_table,
            Tab::Orders => &mut self.orders_table,
            Tab::Contacts => &mut self.contacts_table,
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.active_len();
        let state = self.active_table_mut();
        if len == 0 {
            state.select(None);
            return;
        }
        let current = state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        state.select(Some(next));
    }

    fn clamp_selections(&mut self) {
        clamp(&mut self.menu_table, self.menu.records().len());
        clamp(&mut self.orders_table, self.orders.records().len());
        clamp(&mut self.contacts_table, self.contacts.records().len());
    }
}

fn clamp(state: &mut TableState, len: usize) {
    match state.selected() {
        _ if len == 0 => state.select(None),
        None => state.select(Some(0)),
        Some(selected) if selected >= len => state.select(Some(len - 1)),
        Some(_) => {}
    }
}

fn selected<'a, T>(state: &TableState, records: &'a [T]) -> Option<&'a T> {
    state.selected().and_then(|idx| records.get(idx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_build_rejects_bad_numbers() {
        let mut form = AddItemForm::default();
        form.name = Input::new("Margherita".to_string());
        form.price = Input::new("cheap".to_string());
        assert!(form.build().is_err());

        form.price = Input::new("8.99".to_string());
        form.rating = Input::new("6".to_string());
        assert_eq!(form.build().unwrap_err(), "rating is 0-5");

        form.rating = Input::new("".to_string());
        let (draft, image) = form.build().unwrap();
        assert_eq!(draft.rating, 0);
        assert_eq!(draft.category, Category::Pizza);
        assert!(image.is_none());
    }

    #[test]
    fn selection_clamps_to_collection_bounds() {
        let mut state = TableState::default();
        state.select(Some(5));
        clamp(&mut state, 3);
        assert_eq!(state.selected(), Some(2));
        clamp(&mut state, 0);
        assert_eq!(state.selected(), None);
    }
}
