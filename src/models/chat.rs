// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Chat history model.

use serde::{Deserialize, Serialize};

/// One user message / assistant response pair.
///
/// Append-only; records are never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRecord {
    pub user_id: String,
    /// The user's message, verbatim
    pub user_message: String,
    /// The generated response, verbatim
    pub ai_response: String,
    /// When the exchange happened (RFC3339)
    pub timestamp: String,
}
