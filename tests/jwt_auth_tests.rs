// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JWT authentication tests.
//!
//! These tests verify that tokens created by the auth routes can be decoded
//! by the auth middleware, catching compatibility issues early.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Claims structure that must match what the middleware expects.
/// This is the canonical format - if either create_jwt or the middleware
/// changes, this test should catch the incompatibility.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: usize,
    iat: usize,
}

const SIGNING_KEY: &[u8] = b"test_signing_key_32_bytes_long!!";

fn create_jwt(user_id: &str) -> String {
    nutracia_api::middleware::auth::create_jwt(user_id, SIGNING_KEY, Algorithm::HS256)
        .expect("Failed to create JWT")
}

#[test]
fn test_jwt_roundtrip() {
    // A token issued by the auth flow must decode with the middleware's
    // validation settings and carry the same subject.
    let token = create_jwt("5f7b9a2e-0000-4000-8000-123456789abc");

    let key = DecodingKey::from_secret(SIGNING_KEY);
    let validation = Validation::new(Algorithm::HS256);

    let token_data = decode::<Claims>(&token, &key, &validation)
        .expect("Failed to decode JWT - check Claims struct compatibility");

    assert_eq!(
        token_data.claims.sub,
        "5f7b9a2e-0000-4000-8000-123456789abc"
    );
    assert!(token_data.claims.exp > token_data.claims.iat);
}

#[test]
fn test_jwt_expiry_is_24_hours() {
    let token = create_jwt("user-1");

    let key = DecodingKey::from_secret(SIGNING_KEY);
    let validation = Validation::new(Algorithm::HS256);
    let token_data = decode::<Claims>(&token, &key, &validation).unwrap();

    assert_eq!(
        token_data.claims.exp - token_data.claims.iat,
        24 * 60 * 60,
        "Session tokens should expire 24 hours after issuance"
    );
}

#[test]
fn test_jwt_rejects_wrong_key() {
    let token = create_jwt("user-1");

    let key = DecodingKey::from_secret(b"a_completely_different_key_here!");
    let validation = Validation::new(Algorithm::HS256);

    assert!(decode::<Claims>(&token, &key, &validation).is_err());
}

#[test]
fn test_jwt_rejects_tampered_payload() {
    let token = create_jwt("user-1");

    // Flip a character in the payload segment
    let mut parts: Vec<String> = token.split('.').map(String::from).collect();
    assert_eq!(parts.len(), 3);
    let mut payload: Vec<u8> = parts[1].clone().into_bytes();
    payload[0] = if payload[0] == b'A' { b'B' } else { b'A' };
    parts[1] = String::from_utf8(payload).unwrap();
    let tampered = parts.join(".");

    let key = DecodingKey::from_secret(SIGNING_KEY);
    let validation = Validation::new(Algorithm::HS256);

    assert!(decode::<Claims>(&tampered, &key, &validation).is_err());
}

#[test]
fn test_expired_jwt_rejected() {
    use jsonwebtoken::{encode, EncodingKey, Header};
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize;

    // Expired well past the default validation leeway
    let claims = Claims {
        sub: "user-1".to_string(),
        iat: now - 7200,
        exp: now - 3600,
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SIGNING_KEY),
    )
    .unwrap();

    let key = DecodingKey::from_secret(SIGNING_KEY);
    let validation = Validation::new(Algorithm::HS256);

    assert!(decode::<Claims>(&token, &key, &validation).is_err());
}
