use chrono::NaiveDate;

use crate::record::DocumentRow;

/// One row of the invoice list view: stored figures only, no recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceSummary {
    pub number: String,
    pub client: String,
    pub date: NaiveDate,
    pub total: f64,
}

impl InvoiceSummary {
    pub fn from_row(row: &DocumentRow) -> Self {
        Self {
            number: row.document.number.clone(),
            client: row.document.client.clone(),
            date: row.created_at.date_naive(),
            total: row.document.total,
        }
    }
}

/// Project stored rows into list-view summaries.
pub fn summarize(rows: &[DocumentRow]) -> Vec<InvoiceSummary> {
    rows.iter().map(InvoiceSummary::from_row).collect()
}
