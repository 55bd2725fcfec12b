// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Nutracía: intelligent wellness companion backend
//!
//! This crate provides the backend API for user accounts, wellness
//! profiles, shopping-cart sync, and the Gemini-backed chat assistant.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;
use services::GeminiClient;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub gemini: GeminiClient,
}
