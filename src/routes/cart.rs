// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Cart sync route.

use axum::{extract::State, routing::post, Extension, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{Cart, CartItem};
use crate::time_utils::now_rfc3339;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/cart/sync", post(sync_cart))
}

/// Cart sync payload: the client's full cart snapshot.
#[derive(Debug, Deserialize)]
pub struct CartSyncRequest {
    pub user_id: String,
    pub items: Vec<CartItem>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "frontend/src/generated/")
)]
pub struct CartSyncResponse {
    pub message: String,
    pub items_count: u32,
}

/// Replace the caller's cart with the supplied snapshot.
///
/// The previous snapshot is discarded wholesale; there is no per-item
/// merge. Item shape is validated by deserialization only.
async fn sync_cart(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<CartSyncRequest>,
) -> Result<Json<CartSyncResponse>> {
    auth.authorize(&payload.user_id)?;

    let cart = Cart {
        user_id: payload.user_id,
        items: payload.items,
        updated_at: now_rfc3339(),
    };

    state.db.set_cart(&cart).await?;

    tracing::debug!(
        user_id = %cart.user_id,
        items = cart.items.len(),
        "Cart synced"
    );

    Ok(Json(CartSyncResponse {
        message: "Cart synced successfully".to_string(),
        items_count: cart.items.len() as u32,
    }))
}
