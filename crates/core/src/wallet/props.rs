//! Property-based tests for the wallet ledger.

use billfold_shared::Bill;
use proptest::prelude::*;

use super::ledger::Wallet;
use crate::breakdown::{BreakdownService, Policy};

fn policy() -> impl Strategy<Value = Policy> {
    prop::sample::select(Policy::ALL.to_vec())
}

fn bill() -> impl Strategy<Value = Bill> {
    prop::sample::select(Bill::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Depositing a breakdown into an empty wallet holds exactly the amount.
    #[test]
    fn prop_deposit_round_trip(amount in 0u64..1_000_000, policy in policy()) {
        let mut wallet = Wallet::new();
        let breakdown = BreakdownService::compute(amount, policy);
        prop_assert_eq!(wallet.deposit(&breakdown), Ok(amount));
        prop_assert_eq!(wallet.total_money(), amount);
    }

    /// Deposit then withdraw of the same breakdown empties the wallet.
    #[test]
    fn prop_deposit_withdraw_cancels(amount in 0u64..1_000_000, policy in policy()) {
        let mut wallet = Wallet::new();
        let breakdown = BreakdownService::compute(amount, policy);
        wallet.deposit(&breakdown).unwrap();
        prop_assert_eq!(wallet.withdraw(&breakdown), Ok(amount));
        prop_assert!(wallet.is_empty());
    }

    /// Insert and remove of the same count restores the total.
    #[test]
    fn prop_insert_remove_restores_total(
        start in 0u64..1_000,
        bill in bill(),
        count in 0u64..1_000,
    ) {
        let mut wallet = Wallet::new();
        wallet.insert_bill(Bill::Fifty, start).unwrap();
        let before = wallet.total_money();
        let added = wallet.insert_bill(bill, count).unwrap();
        prop_assert_eq!(wallet.total_money(), before + added);
        prop_assert_eq!(wallet.remove_bill(bill, count), Ok(added));
        prop_assert_eq!(wallet.total_money(), before);
    }

    /// Removing more than held never changes the wallet.
    #[test]
    fn prop_overdraw_rejected(held in 0u64..100, extra in 1u64..100, bill in bill()) {
        let mut wallet = Wallet::new();
        wallet.insert_bill(bill, held).unwrap();
        let before = wallet.clone();
        prop_assert!(wallet.remove_bill(bill, held + extra).is_err());
        prop_assert_eq!(wallet, before);
    }
}
