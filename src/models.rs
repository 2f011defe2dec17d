//! Frontend Models
//!
//! Data structures matching the storefront cart API.

use std::fmt;

use serde::Deserialize;

/// Product identifier as it appears in markup (`data-product-id`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(String);

impl ProductId {
    /// Returns None for blank ids
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

/// Quantity change for one cart line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QtyAction {
    Increment,
    Decrement,
}

impl QtyAction {
    /// Path segment sent to `/api/update_cart/{id}/{action}`
    pub fn as_str(&self) -> &'static str {
        match self {
            QtyAction::Increment => "increment",
            QtyAction::Decrement => "decrement",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "increment" | "inc" | "+" => Some(QtyAction::Increment),
            "decrement" | "dec" | "-" => Some(QtyAction::Decrement),
            _ => None,
        }
    }
}

/// Body of `/api/add_to_cart` and `/api/update_cart` responses
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CartSnapshot {
    pub success: bool,
    pub cart_total_items: Option<u32>,
    pub qty: Option<u32>,
    pub subtotal: Option<f64>,
    pub total: Option<f64>,
    #[serde(alias = "message")]
    pub error: Option<String>,
}

/// Body of `/api/cart_count`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CountSnapshot {
    pub cart_total_items: u32,
}

/// Body of `/admin/products/add`. The backend may send anything; a missing
/// `success` counts as acknowledged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdminAck {
    pub success: Option<bool>,
    pub message: Option<String>,
}

impl AdminAck {
    pub fn accepted(&self) -> bool {
        self.success.unwrap_or(true)
    }
}

/// Money text for totals and subtotals, e.g. `12.50 €`
pub fn format_money(amount: f64, currency: &str) -> String {
    if currency.is_empty() {
        format!("{:.2}", amount)
    } else {
        format!("{:.2} {}", amount, currency)
    }
}
