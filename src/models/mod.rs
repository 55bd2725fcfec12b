// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod cart;
pub mod chat;
pub mod user;

pub use cart::{Cart, CartItem};
pub use chat::ChatRecord;
pub use user::{ProfileUpdate, User};
