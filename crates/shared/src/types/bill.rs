//! Currency bill denominations.
//!
//! The denomination set is fixed and ordered ascending by face value. Every
//! count vector in the system is indexed by [`Bill::index`].

use serde::{Deserialize, Serialize};

/// Number of distinct bill denominations.
pub const DENOMINATION_COUNT: usize = 6;

/// A currency bill of a fixed face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Bill {
    /// One-dollar bill.
    One,
    /// Five-dollar bill.
    Five,
    /// Ten-dollar bill.
    Ten,
    /// Twenty-dollar bill.
    Twenty,
    /// Fifty-dollar bill.
    Fifty,
    /// Hundred-dollar bill.
    Hundred,
}

impl Bill {
    /// All denominations, smallest first.
    pub const ALL: [Self; DENOMINATION_COUNT] = [
        Self::One,
        Self::Five,
        Self::Ten,
        Self::Twenty,
        Self::Fifty,
        Self::Hundred,
    ];

    /// Face value in whole currency units.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::One => 1,
            Self::Five => 5,
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }

    /// Position of this bill in [`Bill::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks up a bill by face value.
    #[must_use]
    pub const fn from_value(value: u32) -> Option<Self> {
        match value {
            1 => Some(Self::One),
            5 => Some(Self::Five),
            10 => Some(Self::Ten),
            20 => Some(Self::Twenty),
            50 => Some(Self::Fifty),
            100 => Some(Self::Hundred),
            _ => None,
        }
    }

    /// The smallest denomination.
    #[must_use]
    pub const fn smallest() -> Self {
        Self::One
    }
}

impl From<Bill> for u32 {
    fn from(bill: Bill) -> Self {
        bill.value()
    }
}

impl TryFrom<u32> for Bill {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or_else(|| format!("Unknown bill denomination: {value}"))
    }
}

impl std::fmt::Display for Bill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.value())
    }
}
