use core::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use facturo_core::{DomainError, ValueObject};
use facturo_pricing::{
    compute_breakdown, LineItem, PaymentMode, PricingBreakdown, PricingOptions, RawNumber,
};

/// Payment state stamped on the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InvoiceStatus {
    Pagado,
    Pendiente,
}

/// Client ("bill to") details. Display-only, no computation impact.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClientDetails {
    pub name: String,
    pub company: String,
    pub rut: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl ValueObject for ClientDetails {}

/// The editing session's state, held as an immutable value.
///
/// Dates are kept as the raw `YYYY-MM-DD` form strings (display-only fields).
/// Quantities and prices keep whatever the form supplied; coercion to numbers
/// happens inside the pricing engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    pub number: String,
    pub invoice_date: String,
    pub due_date: String,
    pub client: ClientDetails,
    pub items: Vec<LineItem>,
    pub discount_pct: f64,
    pub include_iva: bool,
    pub payment_mode: PaymentMode,
    pub status: InvoiceStatus,
}

impl InvoiceDraft {
    /// An empty draft: no items, no discount, IVA on, full payment up front.
    pub fn blank() -> Self {
        Self {
            number: String::new(),
            invoice_date: Utc::now().date_naive().to_string(),
            due_date: String::new(),
            client: ClientDetails::default(),
            items: Vec::new(),
            discount_pct: 0.0,
            include_iva: true,
            payment_mode: PaymentMode::Full,
            status: InvoiceStatus::Pendiente,
        }
    }

    /// The seed draft the editor opens with.
    pub fn sample() -> Self {
        Self {
            number: "INV-001".to_string(),
            invoice_date: Utc::now().date_naive().to_string(),
            due_date: String::new(),
            client: ClientDetails {
                name: "John Doe".to_string(),
                company: "Colegio / Empresa".to_string(),
                rut: "11.222.333-4".to_string(),
                phone: "+56 9 1234 5678".to_string(),
                email: "john.doe@example.com".to_string(),
                address: "123 Main St".to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                zip: "94103".to_string(),
            },
            items: vec![
                LineItem::new("Regalo personalizado", 2.0, 25.0),
                LineItem::new("Empaque premium", 1.0, 8.0),
            ],
            discount_pct: 0.0,
            include_iva: true,
            payment_mode: PaymentMode::Half,
            status: InvoiceStatus::Pendiente,
        }
    }

    pub fn options(&self) -> PricingOptions {
        PricingOptions {
            discount_pct: self.discount_pct,
            include_iva: self.include_iva,
            payment_mode: self.payment_mode,
        }
    }

    /// Live pricing figures for this draft.
    ///
    /// Recomputed on every call; the draft never caches derived totals.
    pub fn breakdown(&self) -> PricingBreakdown {
        compute_breakdown(&self.items, &self.options())
    }
}

/// Header, client and pricing-option fields addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceField {
    Number,
    InvoiceDate,
    DueDate,
    ClientName,
    ClientCompany,
    ClientRut,
    ClientPhone,
    ClientEmail,
    ClientAddress,
    ClientCity,
    ClientState,
    ClientZip,
    DiscountPct,
    IncludeIva,
    PaymentMode,
    Status,
}

impl FromStr for InvoiceField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "number" => Self::Number,
            "invoice_date" => Self::InvoiceDate,
            "due_date" => Self::DueDate,
            "client_name" => Self::ClientName,
            "client_company" => Self::ClientCompany,
            "client_rut" => Self::ClientRut,
            "client_phone" => Self::ClientPhone,
            "client_email" => Self::ClientEmail,
            "client_address" => Self::ClientAddress,
            "client_city" => Self::ClientCity,
            "client_state" => Self::ClientState,
            "client_zip" => Self::ClientZip,
            "discount_pct" => Self::DiscountPct,
            "include_iva" => Self::IncludeIva,
            "payment_mode" => Self::PaymentMode,
            "status" => Self::Status,
            other => {
                return Err(DomainError::validation(format!(
                    "unknown invoice field: {other}"
                )));
            }
        })
    }
}

/// Line-item columns addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Name,
    Quantity,
    Price,
}

impl FromStr for ItemField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "name" => Self::Name,
            "quantity" => Self::Quantity,
            "price" => Self::Price,
            other => {
                return Err(DomainError::validation(format!(
                    "unknown item field: {other}"
                )));
            }
        })
    }
}

/// Apply one form-field change, producing a new draft.
///
/// Total over its inputs: numeric fields coerce non-numeric text to 0, and a
/// raw value that matches no variant of an enum field leaves the draft
/// unchanged. Never mutates `draft`.
pub fn apply_field_change(draft: &InvoiceDraft, field: InvoiceField, raw: &str) -> InvoiceDraft {
    let mut next = draft.clone();
    match field {
        InvoiceField::Number => next.number = raw.to_string(),
        InvoiceField::InvoiceDate => next.invoice_date = raw.to_string(),
        InvoiceField::DueDate => next.due_date = raw.to_string(),
        InvoiceField::ClientName => next.client.name = raw.to_string(),
        InvoiceField::ClientCompany => next.client.company = raw.to_string(),
        InvoiceField::ClientRut => next.client.rut = raw.to_string(),
        InvoiceField::ClientPhone => next.client.phone = raw.to_string(),
        InvoiceField::ClientEmail => next.client.email = raw.to_string(),
        InvoiceField::ClientAddress => next.client.address = raw.to_string(),
        InvoiceField::ClientCity => next.client.city = raw.to_string(),
        InvoiceField::ClientState => next.client.state = raw.to_string(),
        InvoiceField::ClientZip => next.client.zip = raw.to_string(),
        InvoiceField::DiscountPct => next.discount_pct = RawNumber::from(raw).to_f64(),
        InvoiceField::IncludeIva => {
            if let Some(v) = parse_bool(raw) {
                next.include_iva = v;
            }
        }
        InvoiceField::PaymentMode => match raw.trim() {
            "full" => next.payment_mode = PaymentMode::Full,
            "half" => next.payment_mode = PaymentMode::Half,
            _ => {}
        },
        InvoiceField::Status => match raw.trim() {
            "PAGADO" => next.status = InvoiceStatus::Pagado,
            "PENDIENTE" => next.status = InvoiceStatus::Pendiente,
            _ => {}
        },
    }
    next
}

/// Apply one change to the item at `index`, producing a new draft.
///
/// Out-of-range indices are a no-op. Quantity and price keep the raw text as
/// supplied; the pricing engine coerces at computation time.
pub fn apply_item_change(
    draft: &InvoiceDraft,
    index: usize,
    field: ItemField,
    raw: &str,
) -> InvoiceDraft {
    let mut next = draft.clone();
    if let Some(item) = next.items.get_mut(index) {
        match field {
            ItemField::Name => item.name = raw.to_string(),
            ItemField::Quantity => item.quantity = RawNumber::from(raw),
            ItemField::Price => item.price = RawNumber::from(raw),
        }
    }
    next
}

/// Append a blank line item (quantity 1, price 0).
pub fn add_item(draft: &InvoiceDraft) -> InvoiceDraft {
    let mut next = draft.clone();
    next.items.push(LineItem::new("", 1.0, 0.0));
    next
}

/// Remove the line item at `index`. Out-of-range indices are a no-op.
pub fn remove_item(draft: &InvoiceDraft, index: usize) -> InvoiceDraft {
    let mut next = draft.clone();
    if index < next.items.len() {
        next.items.remove(index);
    }
    next
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" => Some(true),
        "false" | "0" | "off" => Some(false),
        _ => None,
    }
}
