//! Property-based tests for bill breakdowns.

use billfold_shared::Bill;
use proptest::prelude::*;

use super::service::BreakdownService;
use super::types::Policy;

/// Strategy for everyday amounts (0 to 1,000,000).
fn amount() -> impl Strategy<Value = u64> {
    0u64..1_000_000
}

fn policy() -> impl Strategy<Value = Policy> {
    prop::sample::select(Policy::ALL.to_vec())
}

/// Brute-force minimum bill count for small amounts.
fn min_bills(amount: u64) -> u64 {
    let amount = usize::try_from(amount).unwrap();
    let mut best = vec![u64::MAX; amount + 1];
    best[0] = 0;
    for a in 1..=amount {
        for bill in Bill::ALL {
            let v = bill.value() as usize;
            if v <= a && best[a - v] != u64::MAX {
                best[a] = best[a].min(best[a - v] + 1);
            }
        }
    }
    best[amount]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every policy reconstructs the requested amount.
    #[test]
    fn prop_total_equals_amount(amount in amount(), policy in policy()) {
        let result = BreakdownService::compute(amount, policy);
        prop_assert_eq!(result.total(), amount);
    }

    /// Highest-first is minimal in bill count for this canonical set.
    #[test]
    fn prop_highest_first_is_minimal(amount in 0u64..500) {
        let result = BreakdownService::compute(amount, Policy::HighestFirst);
        prop_assert_eq!(result.bill_count(), min_bills(amount));
    }

    /// Highest-first never leaves enough smaller bills to trade up.
    #[test]
    fn prop_highest_first_per_slot_bounds(amount in amount()) {
        let result = BreakdownService::compute(amount, Policy::HighestFirst);
        prop_assert!(result.count(Bill::One) < 5);
        prop_assert!(result.count(Bill::Five) < 2);
        prop_assert!(result.count(Bill::Ten) < 2);
        prop_assert!(result.count(Bill::Fifty) < 2);
    }

    /// Dollars-only puts everything in the smallest slot.
    #[test]
    fn prop_dollars_only_single_slot(amount in amount()) {
        let result = BreakdownService::compute(amount, Policy::DollarsOnly);
        prop_assert_eq!(result.count(Bill::One), amount);
        prop_assert_eq!(result.bill_count(), amount);
    }

    /// Twenties-preferred takes every twenty that fits, then decomposes the
    /// remainder without 50s or 100s.
    #[test]
    fn prop_twenties_preferred(amount in amount()) {
        let result = BreakdownService::compute(amount, Policy::TwentiesPreferred);
        prop_assert_eq!(result.count(Bill::Twenty), amount / 20);
        prop_assert_eq!(result.count(Bill::Fifty), 0);
        prop_assert_eq!(result.count(Bill::Hundred), 0);
        let rest = BreakdownService::compute(amount % 20, Policy::HighestFirst);
        prop_assert_eq!(result.count(Bill::Ten), rest.count(Bill::Ten));
        prop_assert_eq!(result.count(Bill::Five), rest.count(Bill::Five));
        prop_assert_eq!(result.count(Bill::One), rest.count(Bill::One));
    }

    /// Unknown tags fall back to the empty breakdown.
    #[test]
    fn prop_unknown_tag_is_zero(amount in amount(), tag in "[a-z]{1,12}") {
        prop_assume!(Policy::from_tag(&tag).is_none());
        prop_assert!(BreakdownService::compute_for_tag(amount, &tag).is_zero());
    }

    /// Negative amounts are always rejected.
    #[test]
    fn prop_negative_rejected(amount in i64::MIN..0, policy in policy()) {
        prop_assert!(BreakdownService::try_compute(amount, policy).is_err());
    }
}
