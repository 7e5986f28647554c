//! Store items offered between matches, and purchase outcomes.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::fields::{as_object, optional_str, required_str, required_u32};
use crate::error::SnapshotError;

/// Currency used when a config does not name one.
pub const DEFAULT_CURRENCY: &str = "coins";

/// One purchasable offer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsellItemConfig {
    pub item_id: String,
    pub quantity: u32,
    pub cost: u32,
    /// Missing or `null` means `DEFAULT_CURRENCY`.
    #[serde(default = "default_currency", deserialize_with = "currency_or_default")]
    pub currency: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_owned()
}

fn currency_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_currency))
}

impl UpsellItemConfig {
    const NAME: &'static str = "UpsellItemConfig";

    /// Parse from a JSON object.
    ///
    /// `itemId`, `quantity` and `cost` are required; `currency` defaults
    /// to `DEFAULT_CURRENCY`.
    #[track_caller]
    pub fn from_object(value: &Value) -> Result<Self, SnapshotError> {
        as_object(value, Self::NAME)?;
        Ok(Self {
            item_id: required_str(value, Self::NAME, "itemId")?,
            quantity: required_u32(value, Self::NAME, "quantity")?,
            cost: required_u32(value, Self::NAME, "cost")?,
            currency: optional_str(value, "currency").unwrap_or_else(default_currency),
        })
    }

    /// Parse a JSON array of offers, failing on the first bad entry.
    #[track_caller]
    pub fn list_from_value(value: &Value) -> Result<Vec<Self>, SnapshotError> {
        let items = value
            .as_array()
            .ok_or_else(|| SnapshotError::new("upsell list: expected a JSON array"))?;
        items.iter().map(Self::from_object).collect()
    }

    /// Cost of one unit, rounded down.
    #[must_use]
    pub fn unit_cost(&self) -> u32 {
        if self.quantity == 0 {
            0
        } else {
            self.cost / self.quantity
        }
    }

    /// Check whether a balance can cover this offer.
    #[must_use]
    pub fn affordable_with(&self, balance: u64) -> bool {
        balance >= u64::from(self.cost)
    }
}

/// Outcome of a purchase attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchaseResult {
    Success,
    InsufficientFunds,
    /// The player backed out.
    Cancelled,
    /// The store reported an error.
    Failed(String),
}

impl PurchaseResult {
    /// Decide the outcome of buying `item` with `balance`.
    #[must_use]
    pub fn evaluate(item: &UpsellItemConfig, balance: u64) -> Self {
        if item.affordable_with(balance) {
            PurchaseResult::Success
        } else {
            PurchaseResult::InsufficientFunds
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, PurchaseResult::Success)
    }
}
