//! Pricing engine for invoice documents.
//!
//! This crate contains the one piece of non-trivial arithmetic in the system:
//! deriving a full pricing breakdown (subtotal, discount, IVA, total, deposit,
//! balance) from a list of line items and a set of pricing options. It is
//! implemented purely as deterministic domain logic (no IO, no storage) and is
//! the single source of truth for these figures — the editor, the preview and
//! the submission path all call into it rather than carrying their own copies.

pub mod breakdown;
pub mod numeric;

pub use breakdown::{
    compute_breakdown, LineItem, PaymentMode, PricingBreakdown, PricingOptions, IVA_RATE,
};
pub use numeric::RawNumber;
