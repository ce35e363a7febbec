//! Checkout step derivation.
//!
//! The current workflow step is recomputed from the location string on
//! every navigation event; it is never stored. The [`RouteTable`] below is
//! the single source of truth for the location-to-step mapping — components
//! that style or enable step indicators must consult it rather than keep a
//! second table.

use serde::{Deserialize, Serialize};

/// Discrete stage of the cart/checkout journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStep {
    /// Reviewing the cart contents
    Cart,
    /// Entering payment and delivery details
    Payment,
    /// Order placed, confirmation shown
    Confirmation,
}

impl CheckoutStep {
    /// 1-based index shown on the step indicator.
    pub fn index(&self) -> u8 {
        match self {
            Self::Cart => 1,
            Self::Payment => 2,
            Self::Confirmation => 3,
        }
    }
}

/// Locations of the checkout journey.
///
/// Loaded from configuration; the defaults match the storefront routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    #[serde(default = "default_cart_path")]
    pub cart_path: String,
    #[serde(default = "default_checkout_path")]
    pub checkout_path: String,
    #[serde(default = "default_success_path")]
    pub success_path: String,
}

fn default_cart_path() -> String {
    "/cart".to_string()
}

fn default_checkout_path() -> String {
    "/checkout".to_string()
}

fn default_success_path() -> String {
    "/checkout/success".to_string()
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            cart_path: default_cart_path(),
            checkout_path: default_checkout_path(),
            success_path: default_success_path(),
        }
    }
}

impl RouteTable {
    /// Derives the workflow step from the current location.
    ///
    /// Exact-match lookup: the cart location maps to step 1, the checkout
    /// location to step 2, the success location to step 3, and any other
    /// location falls back to step 1. Pure and total; no memory of prior
    /// steps, and no forward-progress check — a deep link straight to the
    /// success location yields step 3.
    pub fn resolve_step(&self, location: &str) -> CheckoutStep {
        if location == self.success_path {
            CheckoutStep::Confirmation
        } else if location == self.checkout_path {
            CheckoutStep::Payment
        } else {
            CheckoutStep::Cart
        }
    }
}
