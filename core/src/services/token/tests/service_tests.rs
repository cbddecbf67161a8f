//! Unit tests for token service

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::{DomainError, ErrorKind, TokenError};
use crate::repositories::MockTokenRepository;
use crate::services::token::{make_refresh_token, TokenService, TokenServiceConfig};

fn service() -> TokenService<MockTokenRepository> {
    TokenService::new(MockTokenRepository::new(), TokenServiceConfig::new("test-secret"))
}

#[test]
fn test_refresh_token_shape() {
    let token = make_refresh_token();

    assert_eq!(token.len(), 64);
    assert!(token
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    assert_ne!(token, make_refresh_token());
}

#[test]
fn test_access_token_round_trip_through_service() {
    let service = service();
    let user_id = Uuid::new_v4();

    let token = service.generate_access_token(user_id).unwrap();

    assert_eq!(service.verify_access_token(&token).unwrap(), user_id);
}

#[tokio::test]
async fn test_issue_persists_record() {
    let service = service();
    let user_id = Uuid::new_v4();

    let token = service.issue_refresh_token(user_id).await.unwrap();

    let record = service.repository.get(&token).await.unwrap();
    assert_eq!(record.user_id, user_id);
    assert!(record.revoked_at.is_none());

    let lifetime = record.expires_at - record.created_at;
    assert_eq!(lifetime.num_days(), 60);
}

#[tokio::test]
async fn test_issue_resolve_revoke() {
    let service = service();
    let user_id = Uuid::new_v4();

    let token = service.issue_refresh_token(user_id).await.unwrap();
    assert_eq!(service.resolve_refresh_token(&token).await.unwrap(), user_id);

    service.revoke_refresh_token(&token).await.unwrap();

    match service.resolve_refresh_token(&token).await {
        Err(DomainError::Token(TokenError::NoTokenFound)) => {}
        other => panic!("expected no token found, got {:?}", other),
    }

    // The record stays around, only stamped.
    assert!(service.repository.get(&token).await.unwrap().is_revoked());
}

#[tokio::test]
async fn test_revoke_is_idempotent() {
    let service = service();
    let token = service.issue_refresh_token(Uuid::new_v4()).await.unwrap();

    service.revoke_refresh_token(&token).await.unwrap();
    let first = service.repository.get(&token).await.unwrap().revoked_at;

    service.revoke_refresh_token(&token).await.unwrap();
    service.revoke_refresh_token("never-issued").await.unwrap();

    assert_eq!(service.repository.get(&token).await.unwrap().revoked_at, first);
}

#[tokio::test]
async fn test_expired_token_not_resolved() {
    let service = service();
    let mut record = RefreshToken::new("stale".to_string(), Uuid::new_v4());
    record.expires_at = Utc::now() - Duration::seconds(1);
    service.repository.seed(record).await;

    let err = service.resolve_refresh_token("stale").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unauthenticated);
    assert_eq!(err.public_message(), "no token found");
}

#[tokio::test]
async fn test_unknown_token_not_resolved() {
    let err = service().resolve_refresh_token("nope").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unauthenticated);
}

#[tokio::test]
async fn test_store_failure_is_internal() {
    let service = TokenService::new(
        MockTokenRepository::failing(),
        TokenServiceConfig::new("test-secret"),
    );

    let err = service.issue_refresh_token(Uuid::new_v4()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Internal);
    assert_eq!(service.repository.len().await, 0);
}
