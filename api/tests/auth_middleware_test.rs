//! Integration tests for token extraction and verification on protected routes

mod common;

use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::test;
use chrono::Duration;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::Value;

use common::{bearer, TestContext};
use gym_api::app::create_app;
use gym_core::domain::entities::token::{Claims, TokenKind};

#[actix_web::test]
async fn test_missing_token_is_unauthorized() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/api/user/me").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "UNAUTHORIZED");
}

#[actix_web::test]
async fn test_garbage_token_is_invalid() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/user/me")
        .insert_header(bearer("definitely.not.a-jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "TOKEN_INVALID");
}

#[actix_web::test]
async fn test_expired_token_reports_expiry() {
    let ctx = TestContext::new();
    let (user, _) = ctx.member("Asha Rai", "asha@example.com", "9800000001").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let jwt = &ctx.config.auth.jwt;
    let claims = Claims::new(
        &user,
        TokenKind::Access,
        Duration::minutes(-10),
        &jwt.issuer,
        &jwt.audience,
    );
    let expired = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt.secret.as_bytes()),
    )
    .unwrap();

    let req = test::TestRequest::get()
        .uri("/api/user/me")
        .insert_header(bearer(&expired))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "TOKEN_EXPIRED");
}

#[actix_web::test]
async fn test_refresh_token_is_not_an_access_token() {
    let ctx = TestContext::new();
    let (user, _) = ctx.member("Asha Rai", "asha@example.com", "9800000001").await;
    let tokens = ctx.state.token_service.issue_tokens(&user).unwrap();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/user/me")
        .insert_header(bearer(&tokens.refresh_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_bearer_header_wins_over_cookie() {
    let ctx = TestContext::new();
    let (_, token) = ctx.member("Asha Rai", "asha@example.com", "9800000001").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/user/me")
        .insert_header(bearer(&token))
        .cookie(Cookie::new("token", "stale-cookie-value"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["username"], "Asha Rai");
}

#[actix_web::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let ctx = TestContext::new();
    let (user, _) = ctx.member("Asha Rai", "asha@example.com", "9800000001").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let jwt = &ctx.config.auth.jwt;
    let claims = Claims::new(
        &user,
        TokenKind::Access,
        Duration::minutes(10),
        &jwt.issuer,
        &jwt.audience,
    );
    let forged = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"someone-elses-secret"),
    )
    .unwrap();

    let req = test::TestRequest::get()
        .uri("/api/user/me")
        .cookie(Cookie::new("token", forged))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "TOKEN_INVALID");
}

#[actix_web::test]
async fn test_health_and_unknown_route() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");

    let req = test::TestRequest::get().uri("/api/nowhere").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOT_FOUND");
}
