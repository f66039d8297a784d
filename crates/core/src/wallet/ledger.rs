//! Per-denomination bill ledger.

use billfold_shared::{Bill, DENOMINATION_COUNT};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::WalletError;
use crate::breakdown::BreakdownResult;
use crate::breakdown::types::total_of;

/// A wallet holding a count of bills for each denomination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    bills: [u64; DENOMINATION_COUNT],
}

impl Wallet {
    /// Creates an empty wallet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bills: [0; DENOMINATION_COUNT],
        }
    }

    /// Bills held of one denomination.
    #[must_use]
    pub const fn count(&self, bill: Bill) -> u64 {
        self.bills[bill.index()]
    }

    /// Total money held: sum of face value times count.
    ///
    /// Never saturates: every insert keeps the total within `u64`.
    #[must_use]
    pub fn total_money(&self) -> u64 {
        total_of(&self.bills)
    }

    /// Total number of bills held.
    #[must_use]
    pub fn bill_count(&self) -> u64 {
        self.bills.iter().fold(0u64, |acc, c| acc.saturating_add(*c))
    }

    /// Returns true if the wallet holds no bills.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bills.iter().all(|c| *c == 0)
    }

    /// Adds `count` bills and returns the value added.
    ///
    /// The wallet is left unchanged if its total would exceed `u64::MAX`.
    pub fn insert_bill(&mut self, bill: Bill, count: u64) -> Result<u64, WalletError> {
        let added = u64::from(bill.value())
            .checked_mul(count)
            .ok_or(WalletError::Overflow)?;
        self.total_money()
            .checked_add(added)
            .ok_or(WalletError::Overflow)?;
        let slot = &mut self.bills[bill.index()];
        *slot = slot.checked_add(count).ok_or(WalletError::Overflow)?;
        Ok(added)
    }

    /// Removes `count` bills and returns the value removed.
    ///
    /// The wallet is left unchanged if fewer than `count` bills are held.
    pub fn remove_bill(&mut self, bill: Bill, count: u64) -> Result<u64, WalletError> {
        let held = self.count(bill);
        if held < count {
            warn!(%bill, held, requested = count, "not enough bills to remove");
            return Err(WalletError::InsufficientBills {
                bill,
                held,
                requested: count,
            });
        }
        self.bills[bill.index()] = held - count;
        Ok(u64::from(bill.value()) * count)
    }

    /// Adds bills by raw face value. Unknown face values are ignored and
    /// add nothing.
    pub fn insert_value(&mut self, face_value: u32, count: u64) -> Result<u64, WalletError> {
        match Bill::from_value(face_value) {
            Some(bill) => self.insert_bill(bill, count),
            None => Ok(0),
        }
    }

    /// Removes bills by raw face value. Unknown face values are ignored and
    /// remove nothing.
    pub fn remove_value(&mut self, face_value: u32, count: u64) -> Result<u64, WalletError> {
        match Bill::from_value(face_value) {
            Some(bill) => self.remove_bill(bill, count),
            None => Ok(0),
        }
    }

    /// Adds every bill of a breakdown and returns the value added.
    ///
    /// All-or-nothing: if the total would exceed `u64::MAX`, nothing is added.
    pub fn deposit(&mut self, breakdown: &BreakdownResult) -> Result<u64, WalletError> {
        let added = breakdown
            .iter()
            .try_fold(0u64, |acc, (bill, count)| {
                u64::from(bill.value())
                    .checked_mul(count)
                    .and_then(|value| acc.checked_add(value))
            })
            .ok_or(WalletError::Overflow)?;
        if self.total_money().checked_add(added).is_none() {
            warn!(added, held = self.total_money(), "deposit rejected");
            return Err(WalletError::Overflow);
        }

        for (bill, count) in breakdown.iter() {
            self.insert_bill(bill, count)?;
        }
        Ok(added)
    }

    /// Removes every bill of a breakdown and returns the value removed.
    ///
    /// All-or-nothing: if any denomination runs short, nothing is removed.
    pub fn withdraw(&mut self, breakdown: &BreakdownResult) -> Result<u64, WalletError> {
        if let Some((bill, requested)) = breakdown
            .iter()
            .find(|(bill, count)| self.count(*bill) < *count)
        {
            let held = self.count(bill);
            warn!(%bill, held, requested, "withdrawal rejected");
            return Err(WalletError::InsufficientBills {
                bill,
                held,
                requested,
            });
        }

        let mut removed = 0u64;
        for (bill, count) in breakdown.iter() {
            removed = removed.saturating_add(self.remove_bill(bill, count)?);
        }
        Ok(removed)
    }
}
