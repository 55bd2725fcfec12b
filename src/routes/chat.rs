// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! AI chat route.
//!
//! Each request makes one synchronous generation call with the user's
//! profile interpolated ahead of their message, then appends the exchange
//! to chat history.

use axum::{extract::State, routing::post, Extension, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{ChatRecord, User};
use crate::time_utils::now_rfc3339;
use crate::AppState;

/// Placeholder for profile fields the user has not filled in.
const NOT_SPECIFIED: &str = "Not specified";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/chat/ai", post(chat_with_ai))
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub user_id: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "frontend/src/generated/")
)]
pub struct ChatResponse {
    pub message: String,
    pub response: String,
    pub timestamp: String,
}

/// Forward a user message to Gemini with profile context, log the exchange.
async fn chat_with_ai(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    auth.authorize(&payload.user_id)?;

    let user = state
        .db
        .get_user(&payload.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", payload.user_id)))?;

    let prompt = build_prompt(&user, &payload.message);

    // One generation call, awaited inline. No retry or fallback: failures
    // surface to the client as a server error.
    let ai_response = state.gemini.generate(&prompt).await?;

    let record = ChatRecord {
        user_id: payload.user_id,
        user_message: payload.message,
        ai_response: ai_response.clone(),
        timestamp: now_rfc3339(),
    };
    state.db.add_chat_record(&record).await?;

    tracing::debug!(user_id = %record.user_id, "Chat exchange recorded");

    Ok(Json(ChatResponse {
        message: "AI response generated".to_string(),
        response: ai_response,
        timestamp: record.timestamp,
    }))
}

/// Build the combined system + user prompt.
///
/// Profile fields the user left empty are substituted with literal
/// placeholder strings rather than omitted, keeping the template shape
/// stable for the model.
fn build_prompt(user: &User, message: &str) -> String {
    let name = user.name.as_deref().unwrap_or("User");
    let age = user
        .age
        .map(|a| a.to_string())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string());
    let health_goals = user.health_goals.join(", ");
    let dietary_preferences = user.dietary_preferences.join(", ");
    let fitness_level = user.fitness_level.as_deref().unwrap_or(NOT_SPECIFIED);

    format!(
        "You are Nutracía, an intelligent medical-grade AI wellness companion.\n\
         You provide evidence-based guidance on nutrition, skincare, and fitness.\n\
         \n\
         User Context:\n\
         - Name: {name}\n\
         - Age: {age}\n\
         - Health Goals: {health_goals}\n\
         - Dietary Preferences: {dietary_preferences}\n\
         - Fitness Level: {fitness_level}\n\
         \n\
         Always provide professional, evidence-based advice. If the question is \
         outside your scope or requires medical diagnosis, recommend consulting \
         a healthcare professional.\n\
         \n\
         User Question: {message}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_user() -> User {
        User {
            id: "u-1".to_string(),
            email: "a@example.com".to_string(),
            password_hash: "$2b$12$hash".to_string(),
            name: None,
            age: None,
            health_goals: vec![],
            dietary_preferences: vec![],
            fitness_level: None,
            created_at: "2025-01-01T00:00:00Z".to_string(),
            updated_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_build_prompt_uses_placeholders_for_missing_fields() {
        let prompt = build_prompt(&bare_user(), "What should I eat?");

        assert!(prompt.contains("- Name: User\n"));
        assert!(prompt.contains("- Age: Not specified\n"));
        assert!(prompt.contains("- Fitness Level: Not specified\n"));
    }

    #[test]
    fn test_build_prompt_interpolates_profile() {
        let mut user = bare_user();
        user.name = Some("Ada".to_string());
        user.age = Some(34);
        user.health_goals = vec!["sleep better".to_string(), "run a 10k".to_string()];
        user.dietary_preferences = vec!["vegetarian".to_string()];
        user.fitness_level = Some("intermediate".to_string());

        let prompt = build_prompt(&user, "Plan my week");

        assert!(prompt.contains("- Name: Ada\n"));
        assert!(prompt.contains("- Age: 34\n"));
        assert!(prompt.contains("- Health Goals: sleep better, run a 10k\n"));
        assert!(prompt.contains("- Dietary Preferences: vegetarian\n"));
        assert!(prompt.contains("- Fitness Level: intermediate\n"));
    }

    #[test]
    fn test_build_prompt_ends_with_user_question() {
        let prompt = build_prompt(&bare_user(), "Is creatine safe?");
        assert!(prompt.ends_with("User Question: Is creatine safe?"));
    }

    #[test]
    fn test_build_prompt_keeps_persona_instruction_first() {
        let prompt = build_prompt(&bare_user(), "hi");
        assert!(prompt.starts_with("You are Nutracía"));
        assert!(prompt.contains("recommend consulting a healthcare professional"));
    }
}
