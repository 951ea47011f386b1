//! Credential validation and token round-trip tests

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shared::validation::{validate_email, validate_password};
use uuid::Uuid;

/// Claims as the auth service issues them
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    email: String,
    exp: i64,
    iat: i64,
}

fn issue_token(secret: &str, user_id: Uuid, email: &str, expiry_seconds: i64) -> String {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        exp: (now + Duration::seconds(expiry_seconds)).timestamp(),
        iat: now.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

#[test]
fn accepts_reasonable_emails() {
    for email in ["user@example.com", "first.last@sub.domain.org", "a@b.co"] {
        assert!(validate_email(email).is_ok(), "{}", email);
    }
}

#[test]
fn rejects_malformed_emails() {
    for email in ["", "no-at-sign", "user@", "a@b", "x.y"] {
        assert!(validate_email(email).is_err(), "{}", email);
    }
}

#[test]
fn rejects_short_passwords() {
    assert!(validate_password("1234567").is_err());
    assert!(validate_password("").is_err());
}

#[test]
fn accepts_eight_character_passwords() {
    assert!(validate_password("12345678").is_ok());
    assert!(validate_password("correct horse battery staple").is_ok());
}

#[test]
fn access_token_claims_survive_a_round_trip() {
    let secret = "test-secret";
    let user_id = Uuid::new_v4();
    let token = issue_token(secret, user_id, "user@example.com", 3600);

    let decoded = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .unwrap()
    .claims;

    assert_eq!(decoded.sub, user_id.to_string());
    assert_eq!(decoded.email, "user@example.com");
    assert_eq!(decoded.exp - decoded.iat, 3600);
}

#[test]
fn expired_token_is_rejected() {
    let secret = "test-secret";
    let token = issue_token(secret, Uuid::new_v4(), "user@example.com", -3600);

    let result = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    );
    assert!(result.is_err());
}

#[test]
fn wrong_secret_is_rejected() {
    let token = issue_token("right-secret", Uuid::new_v4(), "user@example.com", 3600);

    let result = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(b"wrong-secret"),
        &Validation::default(),
    );
    assert!(result.is_err());
}
