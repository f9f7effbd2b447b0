//! Integration test for JWT issue/validation.
//!
//! Tokens are minted and validated locally with the same HS256 secret the
//! server would use. No running server or database is needed.
//!
//! Run with: `cargo test --test auth_test`
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

use horus_backend::auth::jwt::{Claims, create_token, validate_token};
use horus_backend::models::users::{Model as User, Roles};

/// A fake secret for testing — never use the real one in tests committed to git.
const TEST_SECRET: &str = "test-secret-at-least-256-bits-long-for-hs256-xxxxxxx";

fn test_user() -> User {
    User {
        id: uuid::Uuid::new_v4().to_string(),
        email: "alice@example.com".to_string(),
        user_name: "alice@example.com".to_string(),
        name: "Alice Smith".to_string(),
        role: Roles::Designer,
        password_hash: "$argon2id$fake".to_string(),
        bio: String::new(),
        facebook: String::new(),
        instagram: String::new(),
        behance: String::new(),
        github: String::new(),
        user_img: String::new(),
        user_title: String::new(),
        phone_number: String::new(),
        cv_url: String::new(),
        created_at: Utc::now(),
    }
}

#[test]
fn test_token_round_trip() {
    let user = test_user();
    let token = create_token(&user, TEST_SECRET).expect("Failed to mint token");

    let claims = validate_token(&token, TEST_SECRET).expect("Token should be valid");

    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.email, "alice@example.com");
    assert!(claims.exp > claims.iat);
}

#[test]
fn test_expired_token_is_rejected() {
    let now = Utc::now().timestamp() as usize;

    let claims = Claims {
        sub: uuid::Uuid::new_v4().to_string(),
        email: "expired@example.com".to_string(),
        exp: now - 300, // expired 5 minutes ago (well past the 60s default leeway)
        iat: now - 3600,
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let result = validate_token(&token, TEST_SECRET);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("ExpiredSignature"));
}

#[test]
fn test_wrong_secret_is_rejected() {
    let token = create_token(&test_user(), TEST_SECRET).unwrap();

    let result = validate_token(&token, "completely-wrong-secret-xxxxxxxxxxxxxxxxxxx");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("InvalidSignature"));
}

#[test]
fn test_garbage_token_is_rejected() {
    let result = validate_token("not.a.valid.jwt", TEST_SECRET);
    assert!(result.is_err());
}
