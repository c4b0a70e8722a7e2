use serde::{Deserialize, Serialize};

use facturo_core::ValueObject;

use crate::numeric::RawNumber;

/// Chilean IVA rate. Single jurisdiction, not configurable per call.
pub const IVA_RATE: f64 = 0.19;

/// One line of an invoice: a description plus quantity and unit price.
///
/// The name is display-only and never enters the computation. Quantity and
/// price are lenient numerics (see [`RawNumber`]): non-numeric input makes the
/// line contribute 0 rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: RawNumber,
    pub price: RawNumber,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: impl Into<RawNumber>, price: impl Into<RawNumber>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            price: price.into(),
        }
    }

    /// Contribution of this line to the subtotal.
    pub fn line_total(&self) -> f64 {
        self.quantity.to_f64() * self.price.to_f64()
    }
}

/// How payment is split between deposit and balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    /// 100% up front.
    Full,
    /// 50% deposit, 50% on completion.
    Half,
}

/// Options applied on top of the line items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingOptions {
    /// Discount percentage. 0–100 expected but deliberately not clamped:
    /// out-of-range values apply their literal arithmetic effect (a negative
    /// discount raises the total, >100 drives the net negative).
    pub discount_pct: f64,
    /// When false, tax is exactly 0 regardless of everything else.
    pub include_iva: bool,
    pub payment_mode: PaymentMode,
}

impl ValueObject for PricingOptions {}

/// Full derived pricing figures for one invoice.
///
/// Always recomputed from items + options on demand; never authoritative
/// state. Currency-unrounded floating point at this layer — rounding happens
/// only at the display boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    pub subtotal: f64,
    pub discount: f64,
    pub net_after_discount: f64,
    pub tax: f64,
    pub total: f64,
    pub deposit: f64,
    pub balance: f64,
}

impl ValueObject for PricingBreakdown {}

/// Derive the full pricing breakdown for `items` under `options`.
///
/// Pure and total: it never fails, malformed numeric input degrades to 0, and
/// the same inputs always produce bit-identical outputs. The evaluation order
/// below is fixed — reordering the steps (or the summation over `items`) would
/// change floating-point results.
pub fn compute_breakdown(items: &[LineItem], options: &PricingOptions) -> PricingBreakdown {
    let subtotal: f64 = items.iter().map(LineItem::line_total).sum();
    let discount = subtotal * (options.discount_pct / 100.0);
    let net_after_discount = subtotal - discount;
    let tax = if options.include_iva {
        net_after_discount * IVA_RATE
    } else {
        0.0
    };
    let total = net_after_discount + tax;
    let deposit = match options.payment_mode {
        PaymentMode::Half => total * 0.5,
        PaymentMode::Full => total,
    };
    let balance = total - deposit;

    PricingBreakdown {
        subtotal,
        discount,
        net_after_discount,
        tax,
        total,
        deposit,
        balance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_items() -> Vec<LineItem> {
        vec![
            LineItem::new("Regalo personalizado", 2.0, 25.0),
            LineItem::new("Empaque premium", 1.0, 8.0),
        ]
    }

    fn options(discount_pct: f64, include_iva: bool, payment_mode: PaymentMode) -> PricingOptions {
        PricingOptions {
            discount_pct,
            include_iva,
            payment_mode,
        }
    }

    #[track_caller]
    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn empty_items_yield_all_zero_breakdown() {
        let b = compute_breakdown(&[], &options(10.0, true, PaymentMode::Half));
        assert_eq!(b.subtotal, 0.0);
        assert_eq!(b.discount, 0.0);
        assert_eq!(b.net_after_discount, 0.0);
        assert_eq!(b.tax, 0.0);
        assert_eq!(b.total, 0.0);
        assert_eq!(b.deposit, 0.0);
        assert_eq!(b.balance, 0.0);
    }

    #[test]
    fn taxed_half_payment_scenario() {
        let b = compute_breakdown(&sample_items(), &options(0.0, true, PaymentMode::Half));
        assert_eq!(b.subtotal, 58.0);
        assert_eq!(b.discount, 0.0);
        assert_eq!(b.net_after_discount, 58.0);
        assert_close(b.tax, 11.02);
        assert_close(b.total, 69.02);
        assert_close(b.deposit, 34.51);
        assert_close(b.balance, 34.51);
    }

    #[test]
    fn discounted_exempt_full_payment_scenario() {
        let b = compute_breakdown(&sample_items(), &options(10.0, false, PaymentMode::Full));
        assert_eq!(b.subtotal, 58.0);
        assert_close(b.discount, 5.8);
        assert_close(b.net_after_discount, 52.2);
        assert_eq!(b.tax, 0.0);
        assert_close(b.total, 52.2);
        assert_close(b.deposit, 52.2);
        assert_eq!(b.balance, 0.0);
    }

    #[test]
    fn non_numeric_item_input_contributes_zero() {
        let items = vec![
            LineItem::new("ok", 2.0, 25.0),
            LineItem::new("blank qty", "", 99.0),
            LineItem::new("garbage price", 3.0, "n/a"),
        ];
        let b = compute_breakdown(&items, &options(0.0, false, PaymentMode::Full));
        assert_eq!(b.subtotal, 50.0);
    }

    // The engine deliberately applies out-of-range discounts literally;
    // these pin that behavior so a clamp would be a conscious change.
    #[test]
    fn negative_discount_raises_the_total() {
        let b = compute_breakdown(&sample_items(), &options(-10.0, false, PaymentMode::Full));
        assert_close(b.discount, -5.8);
        assert_close(b.total, 63.8);
    }

    #[test]
    fn discount_above_hundred_drives_net_negative() {
        let b = compute_breakdown(&sample_items(), &options(150.0, false, PaymentMode::Full));
        assert_close(b.net_after_discount, -29.0);
        assert!(b.total < 0.0);
    }

    fn arb_items() -> impl Strategy<Value = Vec<LineItem>> {
        prop::collection::vec(
            (0.0f64..100.0, 0.0f64..100_000.0)
                .prop_map(|(q, p)| LineItem::new("item", q, p)),
            0..12,
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: subtotal is the sum of quantity × price in input order.
        #[test]
        fn subtotal_is_ordered_sum(items in arb_items()) {
            let b = compute_breakdown(&items, &options(0.0, false, PaymentMode::Full));
            let expected: f64 = items.iter().map(LineItem::line_total).sum();
            prop_assert_eq!(b.subtotal, expected);
        }

        /// Property: without IVA the tax is exactly 0 and total equals net,
        /// for all discount/payment combinations.
        #[test]
        fn exempt_means_zero_tax(
            items in arb_items(),
            discount_pct in -50.0f64..150.0,
            half in any::<bool>(),
        ) {
            let mode = if half { PaymentMode::Half } else { PaymentMode::Full };
            let b = compute_breakdown(&items, &options(discount_pct, false, mode));
            prop_assert_eq!(b.tax, 0.0);
            prop_assert_eq!(b.total, b.net_after_discount);
        }

        /// Property: full payment takes the whole total up front.
        #[test]
        fn full_mode_has_no_balance(
            items in arb_items(),
            discount_pct in -50.0f64..150.0,
            iva in any::<bool>(),
        ) {
            let b = compute_breakdown(&items, &options(discount_pct, iva, PaymentMode::Full));
            prop_assert_eq!(b.deposit, b.total);
            prop_assert_eq!(b.balance, 0.0);
        }

        /// Property: the half split is exact — deposit is total × 0.5 and
        /// deposit + balance reassembles the total bit-for-bit (balance is
        /// defined as total − deposit).
        #[test]
        fn half_mode_splits_evenly(
            items in arb_items(),
            discount_pct in -50.0f64..150.0,
            iva in any::<bool>(),
        ) {
            let b = compute_breakdown(&items, &options(discount_pct, iva, PaymentMode::Half));
            prop_assert_eq!(b.deposit, b.total * 0.5);
            prop_assert_eq!(b.deposit + b.balance, b.total);
        }

        /// Property: a zero discount leaves the subtotal untouched.
        #[test]
        fn zero_discount_is_identity(items in arb_items(), iva in any::<bool>()) {
            let b = compute_breakdown(&items, &options(0.0, iva, PaymentMode::Full));
            prop_assert_eq!(b.discount, 0.0);
            prop_assert_eq!(b.net_after_discount, b.subtotal);
        }

        /// Property: same inputs, same bits.
        #[test]
        fn recomputation_is_deterministic(
            items in arb_items(),
            discount_pct in -50.0f64..150.0,
        ) {
            let opts = options(discount_pct, true, PaymentMode::Half);
            let a = compute_breakdown(&items, &opts);
            let b = compute_breakdown(&items, &opts);
            prop_assert_eq!(a, b);
        }
    }
}
