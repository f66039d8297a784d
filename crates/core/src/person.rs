//! A person carrying a wallet and a denomination preference.

use billfold_shared::PersonConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::breakdown::{BreakdownResult, BreakdownService, Policy};
use crate::wallet::{Wallet, WalletError};

/// A person who gets paid and spends money in bills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Age in years.
    pub age: u32,
    /// Height in metres.
    pub height_m: Decimal,
    /// Weight in kilograms.
    pub weight_kg: Decimal,
    wallet: Option<Wallet>,
    preference: Policy,
}

impl Person {
    /// Creates a person with an empty wallet and the highest-first
    /// preference.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        height_m: Decimal,
        weight_kg: Decimal,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            height_m,
            weight_kg,
            wallet: Some(Wallet::new()),
            preference: Policy::default(),
        }
    }

    /// Creates a person from a configured profile.
    #[must_use]
    pub fn from_config(config: &PersonConfig) -> Self {
        Self::new(
            config.first_name.clone(),
            config.last_name.clone(),
            config.age,
            config.height_m,
            config.weight_kg,
        )
    }

    /// "First Last".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Money in the wallet, or 0 when no wallet is carried.
    #[must_use]
    pub fn cash(&self) -> u64 {
        self.wallet.as_ref().map_or(0, Wallet::total_money)
    }

    /// Current denomination preference.
    #[must_use]
    pub const fn preference(&self) -> Policy {
        self.preference
    }

    /// Sets the denomination preference.
    pub fn set_preference(&mut self, policy: Policy) {
        self.preference = policy;
    }

    /// Sets the preference from a textual tag.
    ///
    /// Returns false and keeps the current preference if the tag is unknown.
    pub fn set_denomination_preference(&mut self, tag: &str) -> bool {
        match Policy::from_tag(tag) {
            Some(policy) => {
                self.preference = policy;
                true
            }
            None => {
                debug!(tag, preference = %self.preference, "ignoring unknown preference tag");
                false
            }
        }
    }

    /// The carried wallet, if any.
    #[must_use]
    pub const fn wallet(&self) -> Option<&Wallet> {
        self.wallet.as_ref()
    }

    /// Mutable access to the carried wallet, if any.
    pub fn wallet_mut(&mut self) -> Option<&mut Wallet> {
        self.wallet.as_mut()
    }

    /// Receives `amount` in bills chosen by the current preference.
    ///
    /// Fails without touching the wallet if its total would overflow.
    pub fn get_paid(&mut self, amount: u64) -> Result<BreakdownResult, WalletError> {
        let preference = self.preference;
        let wallet = self.wallet.as_mut().ok_or(WalletError::NoWallet)?;
        let breakdown = BreakdownService::compute(amount, preference);
        wallet.deposit(&breakdown)?;
        info!(person = %self.full_name(), amount, %preference, "got paid");
        Ok(breakdown)
    }

    /// Pays `amount` in bills chosen by the current preference.
    ///
    /// Fails without touching the wallet if any required bill is missing.
    pub fn spend_money(&mut self, amount: u64) -> Result<BreakdownResult, WalletError> {
        let preference = self.preference;
        let wallet = self.wallet.as_mut().ok_or(WalletError::NoWallet)?;
        let breakdown = BreakdownService::compute(amount, preference);
        wallet.withdraw(&breakdown)?;
        info!(person = %self.full_name(), amount, %preference, "spent money");
        Ok(breakdown)
    }

    /// Starts carrying `wallet`, returning the one carried before.
    pub fn add_wallet(&mut self, wallet: Wallet) -> Option<Wallet> {
        self.wallet.replace(wallet)
    }

    /// Stops carrying the wallet and hands it over.
    pub fn drop_wallet(&mut self) -> Option<Wallet> {
        self.wallet.take()
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "firstname - {}", self.first_name)?;
        writeln!(f, "lastname - {}", self.last_name)?;
        writeln!(f, "age - {}", self.age)?;
        writeln!(f, "height - {}", self.height_m)?;
        writeln!(f, "weight - {}", self.weight_kg)?;
        write!(f, "Current Money - {}", self.cash())
    }
}
