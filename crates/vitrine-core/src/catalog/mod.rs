//! Catalog domain: listing entities and the generic filter.

pub mod filter;
pub mod model;

pub use filter::{filter, matches, DimensionSelection, FilterCriteria, Filterable};
pub use model::{NewsItem, Order, OrderStatus, Product, ServiceOffering};
