//! Breakdown data types.

use billfold_shared::{Bill, DENOMINATION_COUNT};
use serde::{Deserialize, Serialize};

use super::error::BreakdownError;

/// Denomination preference used to break an amount into bills.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// Greedy, largest bill first.
    #[default]
    #[serde(rename = "highestFirst")]
    HighestFirst,
    /// Everything in one-dollar bills.
    #[serde(rename = "dollars")]
    DollarsOnly,
    /// As many twenties as fit, then largest first for the rest.
    #[serde(rename = "twenties")]
    TwentiesPreferred,
}

impl Policy {
    /// All policies.
    pub const ALL: [Self; 3] = [Self::HighestFirst, Self::DollarsOnly, Self::TwentiesPreferred];

    /// Textual tag for this policy.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::HighestFirst => "highestFirst",
            Self::DollarsOnly => "dollars",
            Self::TwentiesPreferred => "twenties",
        }
    }

    /// Resolves a textual tag. Tags are matched exactly.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.tag() == tag)
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for Policy {
    type Err = BreakdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| BreakdownError::UnknownPolicy(s.to_string()))
    }
}

/// Number of bills of each denomination, ordered as [`Bill::ALL`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BreakdownResult {
    counts: [u64; DENOMINATION_COUNT],
}

impl BreakdownResult {
    /// The all-zero breakdown.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            counts: [0; DENOMINATION_COUNT],
        }
    }

    /// Wraps raw counts, smallest denomination first.
    #[must_use]
    pub const fn from_counts(counts: [u64; DENOMINATION_COUNT]) -> Self {
        Self { counts }
    }

    /// Count for one denomination.
    #[must_use]
    pub const fn count(&self, bill: Bill) -> u64 {
        self.counts[bill.index()]
    }

    /// Raw counts, smallest denomination first.
    #[must_use]
    pub const fn counts(&self) -> &[u64; DENOMINATION_COUNT] {
        &self.counts
    }

    pub(crate) fn set(&mut self, bill: Bill, count: u64) {
        self.counts[bill.index()] = count;
    }

    /// Sum of count times face value (saturating).
    #[must_use]
    pub fn total(&self) -> u64 {
        total_of(&self.counts)
    }

    /// Total number of bills.
    #[must_use]
    pub fn bill_count(&self) -> u64 {
        self.counts.iter().fold(0u64, |acc, c| acc.saturating_add(*c))
    }

    /// Returns true if no bills are used.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|c| *c == 0)
    }

    /// Iterates `(bill, count)` pairs, smallest denomination first.
    pub fn iter(&self) -> impl Iterator<Item = (Bill, u64)> + '_ {
        Bill::ALL.iter().map(|bill| (*bill, self.count(*bill)))
    }
}

impl std::fmt::Display for BreakdownResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(bill, count)| format!("{bill} x{count}"))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Totals a count vector against the fixed denominations (saturating).
///
/// Extra entries beyond the denomination set are ignored.
#[must_use]
pub fn total_of(counts: &[u64]) -> u64 {
    counts
        .iter()
        .zip(Bill::ALL.iter())
        .fold(0u64, |acc, (count, bill)| {
            acc.saturating_add(count.saturating_mul(u64::from(bill.value())))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_policy_tags_round_trip() {
        for policy in Policy::ALL {
            assert_eq!(Policy::from_tag(policy.tag()), Some(policy));
        }
    }

    #[test]
    fn test_policy_from_tag_is_exact() {
        assert_eq!(Policy::from_tag("highestFirst"), Some(Policy::HighestFirst));
        assert_eq!(Policy::from_tag("dollars"), Some(Policy::DollarsOnly));
        assert_eq!(Policy::from_tag("twenties"), Some(Policy::TwentiesPreferred));
        assert_eq!(Policy::from_tag("HighestFirst"), None);
        assert_eq!(Policy::from_tag(""), None);
    }

    #[test]
    fn test_policy_from_str_error() {
        assert_eq!(
            Policy::from_str("fifties"),
            Err(BreakdownError::UnknownPolicy("fifties".to_string()))
        );
    }

    #[test]
    fn test_policy_default_is_highest_first() {
        assert_eq!(Policy::default(), Policy::HighestFirst);
    }

    #[test]
    fn test_policy_serde_uses_tags() {
        let json = serde_json::to_string(&Policy::TwentiesPreferred).unwrap();
        assert_eq!(json, "\"twenties\"");
        let policy: Policy = serde_json::from_str("\"dollars\"").unwrap();
        assert_eq!(policy, Policy::DollarsOnly);
    }

    #[test]
    fn test_zero_breakdown() {
        let zero = BreakdownResult::zero();
        assert!(zero.is_zero());
        assert_eq!(zero.total(), 0);
        assert_eq!(zero.bill_count(), 0);
    }

    #[test]
    fn test_total_and_bill_count() {
        let result = BreakdownResult::from_counts([1, 1, 0, 4, 0, 1]);
        assert_eq!(result.total(), 186);
        assert_eq!(result.bill_count(), 7);
        assert_eq!(result.count(Bill::Twenty), 4);
    }

    #[test]
    fn test_total_of_ignores_extra_entries() {
        assert_eq!(total_of(&[2, 1]), 7);
        assert_eq!(total_of(&[0, 0, 0, 0, 0, 1, 99]), 100);
    }

    #[test]
    fn test_display() {
        let result = BreakdownResult::from_counts([2, 1, 0, 2, 0, 0]);
        assert_eq!(
            result.to_string(),
            "$1 x2, $5 x1, $10 x0, $20 x2, $50 x0, $100 x0"
        );
    }
}
