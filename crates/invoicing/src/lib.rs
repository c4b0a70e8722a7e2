//! Invoice editing domain module.
//!
//! This crate contains the editor's draft state and the pure reducers that
//! evolve it. A draft is an immutable value: every field or item change
//! produces a new draft, and derived totals are recomputed from it on demand
//! through `facturo-pricing`. Identity and persistence belong to the store —
//! a draft has neither.

pub mod draft;

pub use draft::{
    add_item, apply_field_change, apply_item_change, remove_item, ClientDetails, InvoiceDraft,
    InvoiceField, InvoiceStatus, ItemField,
};
