use std::sync::Arc;

use facturo_app::EditorSession;
use facturo_render::{format_clp, render_invoice, CompanyProfile};
use facturo_store::InMemoryDocumentStore;

/// Render the seed invoice, run a submit/list round trip against the
/// in-memory store, and print the result. Issuer details can be overridden
/// through `FACTURO_COMPANY_*` environment variables.
fn main() -> anyhow::Result<()> {
    facturo_observability::init();

    let mut company = CompanyProfile::default();
    if let Ok(name) = std::env::var("FACTURO_COMPANY_NAME") {
        company.name = name;
    }
    if let Ok(rut) = std::env::var("FACTURO_COMPANY_RUT") {
        company.rut = rut;
    }
    if let Ok(email) = std::env::var("FACTURO_COMPANY_EMAIL") {
        company.email = email;
    }

    let store = Arc::new(InMemoryDocumentStore::new());
    let session = EditorSession::new(store);

    print!("{}", render_invoice(session.draft(), &company));

    session.submit()?;
    println!();
    println!("Invoices");
    for summary in session.recent_invoices()? {
        println!(
            "  {:<12} {:<24} {}  {}",
            summary.number,
            summary.client,
            summary.date,
            format_clp(summary.total),
        );
    }

    Ok(())
}
