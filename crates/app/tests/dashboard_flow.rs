//! End-to-end dashboard flow: edit a draft, preview it, submit it, list it.

use std::sync::Arc;

use facturo_app::EditorSession;
use facturo_render::{format_clp, render_invoice, CompanyProfile};
use facturo_store::{DocumentStore, InMemoryDocumentStore};

#[test]
fn edit_preview_submit_list_round_trip() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let mut session = EditorSession::new(store.clone());

    // Edit header, client and pricing options through the named-field path.
    session.set_field("number", "INV-042").unwrap();
    session.set_field("client_name", "María Pérez").unwrap();
    session.set_field("discount_pct", "10").unwrap();
    session.set_field("payment_mode", "full").unwrap();

    // Add a third line and fill it in column by column.
    session.add_item();
    session.set_item_field(2, "name", "Tarjeta dedicatoria").unwrap();
    session.set_item_field(2, "quantity", "3").unwrap();
    session.set_item_field(2, "price", "1500").unwrap();

    // 58 + 3×1500 = 4558, minus 10% = 4102.2, plus 19% IVA.
    let live = session.breakdown();
    assert_eq!(live.subtotal, 4558.0);
    assert!((live.net_after_discount - 4102.2).abs() < 1e-9);
    assert_eq!(live.balance, 0.0);

    // The preview shows the same engine output as the editor.
    let doc = render_invoice(session.draft(), &CompanyProfile::default());
    assert!(doc.contains("#INV-042"));
    assert!(doc.contains("María Pérez"));
    assert!(doc.contains("Tarjeta dedicatoria"));
    assert!(doc.contains(&format_clp(live.total)));
    assert!(doc.contains("Condición: 100% antes de iniciar."));

    // Submission freezes the snapshot; the list view reads it back verbatim.
    let row = session.submit().unwrap();
    assert_eq!(row.document.total, live.total);
    assert_eq!(row.document.discount_pct, 10.0);

    let fetched = store.fetch(row.id).unwrap();
    assert_eq!(fetched.document.client, "María Pérez");

    let listed = session.recent_invoices().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].number, "INV-042");
    assert_eq!(listed[0].total, live.total);
}

#[test]
fn malformed_item_input_degrades_instead_of_failing() {
    let mut session = EditorSession::new(Arc::new(InMemoryDocumentStore::new()));

    session.set_item_field(0, "quantity", "a few").unwrap();
    assert_eq!(session.breakdown().subtotal, 8.0);

    // Submission still goes through; the stored snapshot carries the
    // degraded figures and the raw item text.
    let row = session.submit().unwrap();
    assert_eq!(row.document.items[0].quantity.to_string(), "a few");
    assert_eq!(row.document.total, session.breakdown().total);
}
