//! Printable invoice rendering.
//!
//! Produces the human-readable document for preview and printing: issuer
//! header, status stamp, bill-to block, items table and the totals block.
//! All figures come from the pricing engine — this crate does no arithmetic
//! of its own beyond display rounding.

pub mod clp;
pub mod document;

pub use clp::format_clp;
pub use document::{render_invoice, CompanyProfile};
