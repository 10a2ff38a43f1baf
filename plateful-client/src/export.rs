//! Tabular report exporter
//!
//! Deterministic projection of an in-memory collection into a single-sheet
//! spreadsheet artifact (RFC 4180 CSV): one row per record in input order,
//! a fixed declared column set independent of the screen table, empty
//! strings for missing optionals, one fixed date format, and money left as
//! plain numbers so spreadsheet tools can compute on them. Produced
//! entirely in memory; delivering the bytes is the caller's concern.

use crate::error::{ClientError, ClientResult};
use crate::resource::AdminRecord;
use shared::time::format_timestamp;
use shared::{ContactMessage, MenuItem, Order, PaymentKind};

const CSV_MIME: &str = "text/csv";

/// Fixed-column projection of a record into one export row
pub trait Exportable: AdminRecord {
    /// Declared column set, in output order
    const COLUMNS: &'static [&'static str];

    /// One row, exactly `COLUMNS.len()` cells
    fn row(&self) -> Vec<String>;
}

/// Finished export artifact
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub data: Vec<u8>,
    pub mime_type: String,
    /// Fixed, resource-derived filename (e.g. "orders.csv")
    pub filename: String,
    pub row_count: usize,
}

/// Serialize a collection into the export artifact
pub fn export_csv<T: Exportable>(records: &[T]) -> ClientResult<ExportResult> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(T::COLUMNS)
        .map_err(|e| ClientError::Export(e.to_string()))?;

    for record in records {
        writer
            .write_record(record.row())
            .map_err(|e| ClientError::Export(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| ClientError::Export(e.to_string()))?;
    let data = writer
        .into_inner()
        .map_err(|e| ClientError::Export(e.to_string()))?;

    Ok(ExportResult {
        data,
        mime_type: CSV_MIME.to_string(),
        filename: format!("{}.csv", T::RESOURCE),
        row_count: records.len(),
    })
}

impl Exportable for MenuItem {
    const COLUMNS: &'static [&'static str] = &[
        "Id",
        "Name",
        "Description",
        "Category",
        "Price",
        "Rating",
        "Popularity",
        "Image",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.description.clone(),
            self.category.as_str().to_string(),
            self.price.to_string(),
            self.rating.to_string(),
            self.popularity.to_string(),
            self.image.clone().unwrap_or_default(),
        ]
    }
}

impl Exportable for Order {
    const COLUMNS: &'static [&'static str] = &[
        "Id",
        "Email",
        "Phone",
        "Address",
        "City",
        "Zip",
        "Items",
        "Item Count",
        "Total",
        "Payment",
        "Status",
        "Created At",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.address.clone(),
            self.city.clone(),
            self.zip.clone(),
            self.item_summary(),
            self.item_count().to_string(),
            self.total.to_string(),
            PaymentKind::classify(&self.payment_method).as_str().to_string(),
            self.status.as_str().to_string(),
            format_timestamp(self.created_at.as_deref()),
        ]
    }
}

impl Exportable for ContactMessage {
    const COLUMNS: &'static [&'static str] = &[
        "Id",
        "Full Name",
        "Email",
        "Phone",
        "Address",
        "Dish",
        "Query",
        "Created At",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.full_name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.address.clone(),
            self.dish_name.clone().unwrap_or_default(),
            self.query.clone(),
            format_timestamp(self.created_at.as_deref()),
        ]
    }
}
