//! Breakdown service: greedy bill decomposition per policy.

use billfold_shared::Bill;
use tracing::{debug, warn};

use super::error::BreakdownError;
use super::types::{BreakdownResult, Policy};

/// Breakdown service for change-making.
///
/// All functions are pure; every call returns a fresh result.
pub struct BreakdownService;

impl BreakdownService {
    /// Break `amount` into bills according to `policy`.
    ///
    /// The returned counts always total exactly `amount`.
    ///
    /// # Example
    ///
    /// ```
    /// use billfold_core::breakdown::{BreakdownService, Policy};
    /// use billfold_shared::Bill;
    ///
    /// let result = BreakdownService::compute(47, Policy::TwentiesPreferred);
    /// assert_eq!(result.count(Bill::Twenty), 2);
    /// assert_eq!(result.count(Bill::Five), 1);
    /// assert_eq!(result.count(Bill::One), 2);
    /// ```
    #[must_use]
    pub fn compute(amount: u64, policy: Policy) -> BreakdownResult {
        let result = match policy {
            Policy::HighestFirst => Self::highest_first(amount),
            Policy::DollarsOnly => Self::dollars_only(amount),
            Policy::TwentiesPreferred => Self::twenties_preferred(amount),
        };
        debug!(amount, %policy, bills = result.bill_count(), "computed bill breakdown");
        result
    }

    /// Break `amount` into bills using a textual policy tag.
    ///
    /// An unrecognized tag yields the all-zero breakdown.
    #[must_use]
    pub fn compute_for_tag(amount: u64, tag: &str) -> BreakdownResult {
        match Policy::from_tag(tag) {
            Some(policy) => Self::compute(amount, policy),
            None => {
                warn!(amount, tag, "unknown denomination policy, returning empty breakdown");
                BreakdownResult::zero()
            }
        }
    }

    /// Like [`BreakdownService::compute`], but accepts a signed amount and
    /// rejects negatives.
    pub fn try_compute(amount: i64, policy: Policy) -> Result<BreakdownResult, BreakdownError> {
        let amount = u64::try_from(amount).map_err(|_| BreakdownError::InvalidAmount(amount))?;
        Ok(Self::compute(amount, policy))
    }

    fn highest_first(amount: u64) -> BreakdownResult {
        let mut result = BreakdownResult::zero();
        let remaining = greedy_fill(&mut result, amount, None);
        debug_assert_eq!(remaining, 0);
        result
    }

    fn dollars_only(amount: u64) -> BreakdownResult {
        let mut result = BreakdownResult::zero();
        result.set(Bill::smallest(), amount);
        result
    }

    fn twenties_preferred(amount: u64) -> BreakdownResult {
        let twenty = u64::from(Bill::Twenty.value());
        let mut result = BreakdownResult::zero();
        result.set(Bill::Twenty, amount / twenty);
        let remaining = greedy_fill(&mut result, amount % twenty, Some(Bill::Twenty));
        debug_assert_eq!(remaining, 0);
        result
    }
}

/// Largest-to-smallest greedy over every denomination except `skip`.
///
/// Returns what could not be represented (0 unless the one-dollar bill is
/// skipped).
fn greedy_fill(result: &mut BreakdownResult, amount: u64, skip: Option<Bill>) -> u64 {
    let mut remaining = amount;
    for bill in Bill::ALL.iter().rev().filter(|b| Some(**b) != skip) {
        let value = u64::from(bill.value());
        result.set(*bill, remaining / value);
        remaining %= value;
    }
    remaining
}

/// Break `amount` into bills according to `policy`.
///
/// Shorthand for [`BreakdownService::compute`].
#[must_use]
pub fn compute_breakdown(amount: u64, policy: Policy) -> BreakdownResult {
    BreakdownService::compute(amount, policy)
}
