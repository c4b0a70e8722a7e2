use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use facturo_core::{DocumentId, Entity};
use facturo_invoicing::{InvoiceDraft, InvoiceStatus};
use facturo_pricing::LineItem;

/// Flattened submission record, not yet accepted by the store.
///
/// Column-for-column the shape the external `documentos` table expects, so
/// the wire names stay Spanish while the code reads English. The pricing
/// snapshot (total/anticipo/saldo/descuento_pct) is frozen at submission
/// time; the raw item list travels alongside it as a JSON column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDocument {
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "empresa_cliente")]
    pub client: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "direccion")]
    pub address: String,
    pub items: Vec<LineItem>,
    pub total: f64,
    #[serde(rename = "anticipo")]
    pub deposit: f64,
    #[serde(rename = "saldo")]
    pub balance: f64,
    #[serde(rename = "descuento_pct")]
    pub discount_pct: f64,
    #[serde(rename = "estado")]
    pub status: InvoiceStatus,
}

impl NewDocument {
    /// Flatten a draft for submission.
    ///
    /// The breakdown is computed here, once, strictly before the record
    /// leaves the process — the stored figures are a snapshot of the draft at
    /// this moment, never recomputed by readers.
    pub fn from_draft(draft: &InvoiceDraft) -> Self {
        let b = draft.breakdown();
        Self {
            number: draft.number.clone(),
            client: draft.client.name.clone(),
            email: draft.client.email.clone(),
            address: draft.client.address.clone(),
            items: draft.items.clone(),
            total: b.total,
            deposit: b.deposit,
            balance: b.balance,
            discount_pct: draft.discount_pct,
            status: draft.status,
        }
    }
}

/// A document the store has accepted: submission record plus the identity
/// and timestamp the store assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRow {
    pub id: DocumentId,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub document: NewDocument,
}

impl Entity for DocumentRow {
    type Id = DocumentId;

    fn id(&self) -> &DocumentId {
        &self.id
    }
}
