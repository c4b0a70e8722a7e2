use std::sync::Arc;

use facturo_core::DomainResult;
use facturo_invoicing::{self as invoicing, InvoiceDraft, InvoiceField, ItemField};
use facturo_pricing::PricingBreakdown;
use facturo_store::{
    summarize, DocumentRow, DocumentStore, InvoiceSummary, NewDocument, StoreError,
};

/// One invoice editing session: the current draft plus a gateway handle.
///
/// The session owns the only mutable state in the system. Every edit goes
/// through the pure reducers and replaces the draft wholesale; totals are
/// derived on demand and never cached here, so the live figures and the
/// submitted snapshot cannot drift apart.
pub struct EditorSession<S: DocumentStore> {
    draft: InvoiceDraft,
    store: Arc<S>,
}

impl<S: DocumentStore> EditorSession<S> {
    /// Open a session on the seed draft.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_draft(InvoiceDraft::sample(), store)
    }

    pub fn with_draft(draft: InvoiceDraft, store: Arc<S>) -> Self {
        Self { draft, store }
    }

    pub fn draft(&self) -> &InvoiceDraft {
        &self.draft
    }

    /// Live totals for the current draft.
    pub fn breakdown(&self) -> PricingBreakdown {
        self.draft.breakdown()
    }

    /// Apply a form-field change by field name.
    ///
    /// Fails only on an unrecognized field name; the reducer itself is total.
    pub fn set_field(&mut self, field: &str, raw: &str) -> DomainResult<()> {
        let field: InvoiceField = field.parse()?;
        self.draft = invoicing::apply_field_change(&self.draft, field, raw);
        tracing::debug!(total = self.breakdown().total, "draft field changed");
        Ok(())
    }

    /// Apply a line-item change by column name.
    pub fn set_item_field(&mut self, index: usize, field: &str, raw: &str) -> DomainResult<()> {
        let field: ItemField = field.parse()?;
        self.draft = invoicing::apply_item_change(&self.draft, index, field, raw);
        tracing::debug!(index, total = self.breakdown().total, "line item changed");
        Ok(())
    }

    pub fn add_item(&mut self) {
        self.draft = invoicing::add_item(&self.draft);
    }

    pub fn remove_item(&mut self, index: usize) {
        self.draft = invoicing::remove_item(&self.draft, index);
    }

    /// Flatten the draft and hand it to the gateway.
    ///
    /// The breakdown snapshot is taken here, synchronously, before anything
    /// leaves the process.
    pub fn submit(&self) -> Result<DocumentRow, StoreError> {
        let document = NewDocument::from_draft(&self.draft);
        let row = self.store.insert(document)?;
        tracing::info!(
            number = %row.document.number,
            total = row.document.total,
            "invoice saved"
        );
        Ok(row)
    }

    /// Stored invoices for the list view. Displays the stored snapshot;
    /// nothing is recomputed.
    pub fn recent_invoices(&self) -> Result<Vec<InvoiceSummary>, StoreError> {
        Ok(summarize(&self.store.list()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facturo_store::InMemoryDocumentStore;

    fn session() -> EditorSession<InMemoryDocumentStore> {
        EditorSession::new(Arc::new(InMemoryDocumentStore::new()))
    }

    #[test]
    fn unknown_field_name_is_rejected_without_touching_the_draft() {
        let mut s = session();
        let before = s.draft().clone();
        assert!(s.set_field("favourite_color", "blue").is_err());
        assert_eq!(s.draft(), &before);
    }

    #[test]
    fn edits_flow_into_live_totals() {
        let mut s = session();
        assert_eq!(s.breakdown().subtotal, 58.0);

        s.set_item_field(0, "quantity", "4").unwrap();
        assert_eq!(s.breakdown().subtotal, 108.0);

        s.set_field("discount_pct", "50").unwrap();
        assert_eq!(s.breakdown().discount, 54.0);
    }

    #[test]
    fn submitted_snapshot_matches_the_live_figures() {
        let s = session();
        let live = s.breakdown();
        let row = s.submit().unwrap();
        assert_eq!(row.document.total, live.total);
        assert_eq!(row.document.deposit, live.deposit);
        assert_eq!(row.document.balance, live.balance);

        let listed = s.recent_invoices().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].total, live.total);
    }
}
