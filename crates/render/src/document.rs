//! Plain-text invoice document layout.

use facturo_invoicing::{InvoiceDraft, InvoiceStatus};
use facturo_pricing::PaymentMode;

use crate::clp::format_clp;

const WIDTH: usize = 72;

/// Issuer identity shown in the document header and footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyProfile {
    pub name: String,
    pub rut: String,
    pub city: String,
    pub email: String,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            name: "Love Presents SPA".to_string(),
            rut: "RUT 77.674.431-K".to_string(),
            city: "Santiago, Chile".to_string(),
            email: "contacto@lovepresents.cl".to_string(),
        }
    }
}

fn width_of(s: &str) -> usize {
    s.chars().count()
}

fn two_cols(left: &str, right: &str) -> String {
    let pad = WIDTH.saturating_sub(width_of(left) + width_of(right));
    format!("{left}{}{right}", " ".repeat(pad))
}

/// Totals occupy the right half of the page, like the on-screen preview.
fn totals_row(label: &str, amount: &str) -> String {
    let half = WIDTH / 2;
    let pad = half.saturating_sub(width_of(label) + width_of(amount));
    format!("{}{label}{}{amount}", " ".repeat(half), " ".repeat(pad))
}

fn push_nonempty(lines: &mut Vec<String>, value: &str) {
    if !value.is_empty() {
        lines.push(value.to_string());
    }
}

fn status_stamp(status: InvoiceStatus) -> &'static str {
    match status {
        InvoiceStatus::Pagado => "[ PAGADO ]",
        InvoiceStatus::Pendiente => "[ PENDIENTE DE PAGO ]",
    }
}

fn payment_condition(mode: PaymentMode) -> &'static str {
    match mode {
        PaymentMode::Half => "Condición: 50% antes y 50% al terminar.",
        PaymentMode::Full => "Condición: 100% antes de iniciar.",
    }
}

/// Render the full printable invoice for `draft`.
///
/// Every figure comes from `draft.breakdown()`; the editor's live totals and
/// this document can never disagree.
pub fn render_invoice(draft: &InvoiceDraft, company: &CompanyProfile) -> String {
    let b = draft.breakdown();
    let mut lines: Vec<String> = Vec::new();

    // Header: issuer on the left, document identity on the right.
    lines.push(two_cols(&company.name, "FACTURA"));
    lines.push(two_cols(&company.rut, &format!("#{}", draft.number)));
    lines.push(two_cols(
        &company.city,
        &format!("Fecha: {}", draft.invoice_date),
    ));
    if !draft.due_date.is_empty() {
        lines.push(two_cols("", &format!("Vence: {}", draft.due_date)));
    }
    lines.push(two_cols("", status_stamp(draft.status)));
    lines.push("=".repeat(WIDTH));

    // Bill-to block, skipping fields the form left blank.
    lines.push("Bill To:".to_string());
    push_nonempty(&mut lines, &draft.client.company);
    push_nonempty(&mut lines, &draft.client.name);
    push_nonempty(&mut lines, &draft.client.address);
    let locality = [
        draft.client.city.as_str(),
        draft.client.state.as_str(),
        draft.client.zip.as_str(),
    ]
    .iter()
    .filter(|s| !s.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(" ");
    push_nonempty(&mut lines, &locality);
    push_nonempty(&mut lines, &draft.client.rut);
    push_nonempty(&mut lines, &draft.client.phone);
    push_nonempty(&mut lines, &draft.client.email);
    lines.push(String::new());

    // Items table.
    lines.push(format!(
        "{:<32}{:>8}{:>16}{:>16}",
        "DESCRIPCIÓN", "CANT.", "PRECIO", "TOTAL"
    ));
    lines.push("-".repeat(WIDTH));
    for item in &draft.items {
        lines.push(format!(
            "{:<32}{:>8}{:>16}{:>16}",
            item.name,
            item.quantity.to_string(),
            format_clp(item.price.to_f64()),
            format_clp(item.line_total()),
        ));
    }
    lines.push("-".repeat(WIDTH));

    // Totals block.
    lines.push(totals_row("Subtotal", &format_clp(b.subtotal)));
    lines.push(totals_row(
        &format!("Descuento ({}%)", draft.discount_pct),
        &format!("-{}", format_clp(b.discount)),
    ));
    let iva = if draft.include_iva {
        format_clp(b.tax)
    } else {
        "$0 (exento)".to_string()
    };
    lines.push(totals_row("IVA 19%", &iva));
    lines.push(totals_row("TOTAL", &format_clp(b.total)));
    lines.push(totals_row("Anticipo", &format_clp(b.deposit)));
    lines.push(totals_row("Saldo", &format_clp(b.balance)));
    lines.push(two_cols("", payment_condition(draft.payment_mode)));
    lines.push(String::new());

    // Footer.
    lines.push(center("Thank you for your business!"));
    lines.push(center(&format!("{} · {}", company.name, company.email)));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn center(text: &str) -> String {
    let pad = WIDTH.saturating_sub(width_of(text)) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use facturo_invoicing::{apply_field_change, InvoiceField};

    fn sample_doc() -> String {
        render_invoice(&InvoiceDraft::sample(), &CompanyProfile::default())
    }

    #[test]
    fn header_carries_issuer_and_document_identity() {
        let doc = sample_doc();
        assert!(doc.contains("Love Presents SPA"));
        assert!(doc.contains("FACTURA"));
        assert!(doc.contains("#INV-001"));
        assert!(doc.contains("[ PENDIENTE DE PAGO ]"));
    }

    #[test]
    fn totals_come_from_the_pricing_engine() {
        let doc = sample_doc();
        // Seed draft: subtotal 58, IVA 11.02 → $11, total $69, split evenly.
        assert!(doc.contains("Subtotal"));
        assert!(doc.contains("$58"));
        assert!(doc.contains("$69"));
        assert!(doc.contains("Anticipo"));
        assert!(doc.contains("Condición: 50% antes y 50% al terminar."));
    }

    #[test]
    fn exempt_invoices_say_so_instead_of_a_zero_tax_line() {
        let draft = apply_field_change(&InvoiceDraft::sample(), InvoiceField::IncludeIva, "false");
        let doc = render_invoice(&draft, &CompanyProfile::default());
        assert!(doc.contains("$0 (exento)"));
    }

    #[test]
    fn full_payment_condition_line() {
        let draft = apply_field_change(&InvoiceDraft::sample(), InvoiceField::PaymentMode, "full");
        let doc = render_invoice(&draft, &CompanyProfile::default());
        assert!(doc.contains("Condición: 100% antes de iniciar."));
    }

    #[test]
    fn blank_client_fields_are_omitted() {
        let doc = render_invoice(&InvoiceDraft::blank(), &CompanyProfile::default());
        // Blank drafts still render, just with an empty bill-to block.
        assert!(doc.contains("Bill To:"));
        assert!(!doc.contains("John Doe"));
    }

    #[test]
    fn paid_invoices_are_stamped_pagado() {
        let draft = apply_field_change(&InvoiceDraft::sample(), InvoiceField::Status, "PAGADO");
        let doc = render_invoice(&draft, &CompanyProfile::default());
        assert!(doc.contains("[ PAGADO ]"));
        assert!(!doc.contains("PENDIENTE DE PAGO"));
    }
}
