// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Signup and login routes.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::auth::create_jwt;
use crate::models::User;
use crate::services::password;
use crate::time_utils::now_rfc3339;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/signup", post(signup))
        .route("/api/login", post(login))
}

/// Signup request payload.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    pub name: Option<String>,
    pub age: Option<u32>,
    #[serde(default)]
    pub health_goals: Vec<String>,
}

/// Login request payload.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response for both signup and login.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "frontend/src/generated/")
)]
pub struct AuthResponse {
    pub message: String,
    pub user_id: String,
    pub access_token: String,
    pub token_type: String,
}

/// Create a new account and issue a session token.
async fn signup(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<AuthResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    // Email uniqueness is checked at creation time only
    if state.db.find_user_by_email(&payload.email).await?.is_some() {
        return Err(AppError::EmailTaken);
    }

    let now = now_rfc3339();
    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        email: payload.email,
        password_hash: password::hash_password(&payload.password)?,
        name: payload.name,
        age: payload.age,
        health_goals: payload.health_goals,
        dietary_preferences: Vec::new(),
        fitness_level: None,
        created_at: now.clone(),
        updated_at: now,
    };

    state.db.upsert_user(&user).await?;

    let token = create_jwt(
        &user.id,
        &state.config.jwt_signing_key,
        state.config.jwt_algorithm,
    )?;

    tracing::info!(user_id = %user.id, "User created");

    Ok(Json(AuthResponse {
        message: "User created successfully".to_string(),
        user_id: user.id,
        access_token: token,
        token_type: "bearer".to_string(),
    }))
}

/// Authenticate with email and password, issue a fresh token.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    // Same error for unknown email and wrong password
    let user = state
        .db
        .find_user_by_email(&payload.email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !password::verify_password(&payload.password, &user.password_hash) {
        return Err(AppError::Unauthorized);
    }

    let token = create_jwt(
        &user.id,
        &state.config.jwt_signing_key,
        state.config.jwt_algorithm,
    )?;

    tracing::info!(user_id = %user.id, "Login successful");

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        user_id: user.id,
        access_token: token,
        token_type: "bearer".to_string(),
    }))
}
