//! Checkout domain: cart contents and workflow-step derivation.

pub mod cart;
pub mod step;

pub use cart::{Cart, CartItem};
pub use step::{CheckoutStep, RouteTable};
