//! Cart state.

use serde::{Deserialize, Serialize};

use crate::catalog::model::Product;

/// One product line in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub unit_price_cents: u64,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total_cents(&self) -> u64 {
        self.unit_price_cents * u64::from(self.quantity)
    }
}

/// The customer's cart: owned line items in insertion order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product, merging into an existing line when present.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.quantity += quantity;
        } else {
            self.items.push(CartItem {
                product_id: product.id.clone(),
                name: product.name.clone(),
                unit_price_cents: product.price_cents,
                quantity,
            });
        }
    }

    /// Sets the quantity of a line; zero removes it.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
        } else if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
        }
    }

    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product_id != product_id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn subtotal_cents(&self) -> u64 {
        self.items.iter().map(CartItem::line_total_cents).sum()
    }
}
