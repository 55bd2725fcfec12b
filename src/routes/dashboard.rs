// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard summary route.

use axum::{
    extract::{Path, State},
    routing::get,
    Extension, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::time_utils::now_rfc3339;
use crate::AppState;

/// The dashboard only reports how many of the newest chats exist, capped here.
const RECENT_CHAT_LIMIT: u32 = 5;

/// Editorial tip shown to every user. Static on purpose; personalized
/// tips come from the chat assistant instead.
const DAILY_TIP: &str =
    "Stay hydrated! Aim for 8 glasses of water daily for optimal wellness.";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/dashboard/{user_id}", get(get_dashboard))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "frontend/src/generated/")
)]
pub struct DashboardResponse {
    pub user_id: String,
    pub name: String,
    pub health_goals: Vec<String>,
    pub recent_chats: u32,
    pub cart_items_count: u32,
    pub daily_tip: String,
    pub last_updated: String,
}

/// Assemble the caller's dashboard summary.
///
/// Read-only composition over the user, chat history, and cart documents.
async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(user_id): Path<String>,
) -> Result<Json<DashboardResponse>> {
    auth.authorize(&user_id)?;

    let user = state
        .db
        .get_user(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

    let recent_chats = state
        .db
        .get_recent_chat_records(&user_id, RECENT_CHAT_LIMIT)
        .await?;

    let cart_items_count = state
        .db
        .get_cart(&user_id)
        .await?
        .map(|cart| cart.items.len())
        .unwrap_or(0);

    Ok(Json(DashboardResponse {
        user_id,
        name: user.name.unwrap_or_else(|| "User".to_string()),
        health_goals: user.health_goals,
        recent_chats: recent_chats.len() as u32,
        cart_items_count: cart_items_count as u32,
        daily_tip: DAILY_TIP.to_string(),
        last_updated: now_rfc3339(),
    }))
}
