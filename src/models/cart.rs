// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shopping cart model.

use serde::{Deserialize, Serialize};

/// One line item in a cart.
///
/// Items are stored exactly as the client sent them; price and quantity
/// are not range-checked here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub product_name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i64,
}

/// A user's cart snapshot, one document per user (doc ID = user_id).
///
/// Every sync replaces the whole snapshot; items carry no identity
/// across syncs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    pub user_id: String,
    pub items: Vec<CartItem>,
    /// When the cart was last synced (RFC3339)
    pub updated_at: String,
}
