//! Catalog domain models.
//!
//! The four record kinds shown in storefront and back-office listings.
//! Each implements [`Filterable`](crate::catalog::filter::Filterable) by
//! designating its searchable field(s) and categorical dimensions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::filter::Filterable;

/// Dimension name for product/service categories.
pub const DIM_CATEGORY: &str = "category";
/// Dimension name for order status.
pub const DIM_STATUS: &str = "status";
/// Dimension name for news topics.
pub const DIM_TOPIC: &str = "topic";

/// A physical product sold through the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Categorical dimension shown as a listing filter
    pub category: String,
    pub price_cents: u64,
    pub in_stock: bool,
}

impl Filterable for Product {
    fn search_text(&self) -> Vec<&str> {
        vec![&self.name]
    }

    fn dimension(&self, name: &str) -> Option<&str> {
        match name {
            DIM_CATEGORY => Some(&self.category),
            _ => None,
        }
    }
}

/// A bookable service offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub id: String,
    pub title: String,
    pub category: String,
    pub duration_minutes: u32,
    pub price_cents: u64,
}

impl Filterable for ServiceOffering {
    fn search_text(&self) -> Vec<&str> {
        vec![&self.title]
    }

    fn dimension(&self, name: &str) -> Option<&str> {
        match name {
            DIM_CATEGORY => Some(&self.category),
            _ => None,
        }
    }
}

/// Lifecycle status of a customer order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OrderStatus {
    Processing,
    Accepted,
    Shipped,
    Cancelled,
}

impl OrderStatus {
    /// The dimension value this status filters under.
    pub fn as_dimension_value(&self) -> &'static str {
        match self {
            Self::Processing => "processing",
            Self::Accepted => "accepted",
            Self::Shipped => "shipped",
            Self::Cancelled => "cancelled",
        }
    }
}

/// A customer order as shown in the back-office listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub status: OrderStatus,
    pub total_cents: u64,
    pub placed_at: DateTime<Utc>,
}

impl Filterable for Order {
    // Back-office staff search orders by customer or by order number.
    fn search_text(&self) -> Vec<&str> {
        vec![&self.customer_name, &self.id]
    }

    fn dimension(&self, name: &str) -> Option<&str> {
        match name {
            DIM_STATUS => Some(self.status.as_dimension_value()),
            _ => None,
        }
    }
}

/// A news/announcement entry on the content pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub topic: String,
    pub published_at: DateTime<Utc>,
}

impl Filterable for NewsItem {
    fn search_text(&self) -> Vec<&str> {
        vec![&self.title]
    }

    fn dimension(&self, name: &str) -> Option<&str> {
        match name {
            DIM_TOPIC => Some(&self.topic),
            _ => None,
        }
    }
}
