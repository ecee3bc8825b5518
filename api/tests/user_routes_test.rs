//! Integration tests for the member account routes under /api/user and /api/auth

mod common;

use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{json, Value};

use common::{bearer, signup_body, TestContext, PASSWORD};
use gym_api::app::create_app;

#[actix_web::test]
async fn test_signup_then_me_with_bearer_token() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/user/signup")
        .set_json(signup_body("Asha Rai", "Asha@Example.com", "9800000001"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let cookie_names: Vec<String> = resp
        .response()
        .cookies()
        .map(|c| c.name().to_string())
        .collect();
    assert!(cookie_names.contains(&"token".to_string()));
    assert!(cookie_names.contains(&"refreshToken".to_string()));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Registration successful");
    assert_eq!(body["user"]["email"], "asha@example.com");
    assert!(body["user"].get("passwordHash").is_none());
    let token = body["token"].as_str().unwrap().to_string();
    assert!(body["refreshToken"].as_str().is_some());

    let req = test::TestRequest::get()
        .uri("/api/user/me")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let profile: Value = test::read_body_json(resp).await;
    assert_eq!(
        profile,
        json!({ "username": "Asha Rai", "email": "asha@example.com", "phone": "9800000001" })
    );
}

#[actix_web::test]
async fn test_signup_duplicate_email_conflict() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let first = test::TestRequest::post()
        .uri("/api/user/signup")
        .set_json(signup_body("Asha Rai", "asha@example.com", "9800000001"))
        .to_request();
    assert_eq!(test::call_service(&app, first).await.status(), StatusCode::CREATED);

    let second = test::TestRequest::post()
        .uri("/api/user/signup")
        .set_json(signup_body("Asha Again", "ASHA@example.com", "9800000002"))
        .to_request();
    let resp = test::call_service(&app, second).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "CONFLICT");
    assert_eq!(body["details"]["field"], "email");
    assert_eq!(ctx.users.len().await, 1);
}

#[actix_web::test]
async fn test_signup_rejects_invalid_fields() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/user/signup")
        .set_json(signup_body("Asha Rai", "asha@example.com", "98-0000-0001"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(body["details"]["field"], "phoneNumber");

    // Missing password never reaches the service
    let req = test::TestRequest::post()
        .uri("/api/user/signup")
        .set_json(json!({ "name": "Asha", "email": "asha@example.com", "phoneNumber": "9800000001" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(ctx.users.len().await, 0);
}

#[actix_web::test]
async fn test_malformed_json_is_validation_error() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/user/signin")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn test_signin_failures_are_indistinguishable() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/user/signup")
        .set_json(signup_body("Asha Rai", "asha@example.com", "9800000001"))
        .to_request();
    test::call_service(&app, req).await;

    let wrong_password = test::TestRequest::post()
        .uri("/api/user/signin")
        .set_json(json!({ "email": "asha@example.com", "password": "not-the-password" }))
        .to_request();
    let resp = test::call_service(&app, wrong_password).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let first: Value = test::read_body_json(resp).await;

    let unknown_email = test::TestRequest::post()
        .uri("/api/user/signin")
        .set_json(json!({ "email": "nobody@example.com", "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, unknown_email).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let second: Value = test::read_body_json(resp).await;

    assert_eq!(first["error"], "INVALID_CREDENTIALS");
    assert_eq!(first["error"], second["error"]);
    assert_eq!(first["message"], second["message"]);
}

#[actix_web::test]
async fn test_signin_cookie_authenticates_me() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/user/signup")
        .set_json(signup_body("Asha Rai", "asha@example.com", "9800000001"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/user/signin")
        .set_json(json!({ "email": " ASHA@example.com ", "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "token")
        .map(|c| c.into_owned())
        .expect("access cookie");
    assert!(cookie.http_only().unwrap_or(false));

    let req = test::TestRequest::get()
        .uri("/api/user/me")
        .cookie(Cookie::new("token", cookie.value().to_string()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_logout_clears_session_cookies() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post().uri("/api/user/logout").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cleared: Vec<_> = resp
        .response()
        .cookies()
        .map(|c| (c.name().to_string(), c.value().to_string(), c.max_age()))
        .collect();
    assert_eq!(cleared.len(), 2);
    for (_, value, max_age) in &cleared {
        assert!(value.is_empty());
        assert_eq!(*max_age, Some(actix_web::cookie::time::Duration::ZERO));
    }

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Logged out successfully");
}

#[actix_web::test]
async fn test_update_phone() {
    let ctx = TestContext::new();
    let (_, token) = ctx.member("Asha Rai", "asha@example.com", "9800000001").await;
    ctx.member("Bina Lama", "bina@example.com", "9800000002").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::put()
        .uri("/api/user/update-phone")
        .insert_header(bearer(&token))
        .set_json(json!({ "phone": "9811111111" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["phone"], "9811111111");

    let taken = test::TestRequest::put()
        .uri("/api/user/update-phone")
        .insert_header(bearer(&token))
        .set_json(json!({ "phone": "9800000002" }))
        .to_request();
    assert_eq!(test::call_service(&app, taken).await.status(), StatusCode::CONFLICT);

    let invalid = test::TestRequest::put()
        .uri("/api/user/update-phone")
        .insert_header(bearer(&token))
        .set_json(json!({ "phone": "12345" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, invalid).await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[actix_web::test]
async fn test_change_password_then_signin_with_new_password() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/user/signup")
        .set_json(signup_body("Asha Rai", "asha@example.com", "9800000001"))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let token = body["token"].as_str().unwrap().to_string();

    let wrong_current = test::TestRequest::put()
        .uri("/api/user/change-password")
        .insert_header(bearer(&token))
        .set_json(json!({ "currentPassword": "guess-again", "newPassword": "brand-new-pass" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, wrong_current).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let req = test::TestRequest::put()
        .uri("/api/user/change-password")
        .insert_header(bearer(&token))
        .set_json(json!({ "currentPassword": PASSWORD, "newPassword": "brand-new-pass" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let old = test::TestRequest::post()
        .uri("/api/user/signin")
        .set_json(json!({ "email": "asha@example.com", "password": PASSWORD }))
        .to_request();
    assert_eq!(
        test::call_service(&app, old).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let new = test::TestRequest::post()
        .uri("/api/user/signin")
        .set_json(json!({ "email": "asha@example.com", "password": "brand-new-pass" }))
        .to_request();
    assert_eq!(test::call_service(&app, new).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_delete_account_only_for_self() {
    let ctx = TestContext::new();
    let (asha, token) = ctx.member("Asha Rai", "asha@example.com", "9800000001").await;
    let (bina, _) = ctx.member("Bina Lama", "bina@example.com", "9800000002").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/user/delete-account/{}", bina.id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(ctx.users.len().await, 2);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/user/delete-account/{}", asha.id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Account deleted successfully");

    // The token outlives the account; lookups now miss
    let req = test::TestRequest::get()
        .uri("/api/user/me")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_account_rejects_malformed_id() {
    let ctx = TestContext::new();
    let (_, token) = ctx.member("Asha Rai", "asha@example.com", "9800000001").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::delete()
        .uri("/api/user/delete-account/not-a-uuid")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["details"]["field"], "id");
}

#[actix_web::test]
async fn test_refresh_token_from_cookie_and_body() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/user/signup")
        .set_json(signup_body("Asha Rai", "asha@example.com", "9800000001"))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let access = body["token"].as_str().unwrap().to_string();
    let refresh = body["refreshToken"].as_str().unwrap().to_string();

    let from_cookie = test::TestRequest::post()
        .uri("/api/auth/refresh-token")
        .cookie(Cookie::new("refreshToken", refresh.clone()))
        .to_request();
    let resp = test::call_service(&app, from_cookie).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Token refreshed successfully");
    assert_eq!(body["user"]["email"], "asha@example.com");

    let from_body = test::TestRequest::post()
        .uri("/api/auth/refresh-token")
        .set_json(json!({ "refreshToken": refresh }))
        .to_request();
    assert_eq!(test::call_service(&app, from_body).await.status(), StatusCode::OK);

    // A cleared cookie does not hide the token in the body
    let cleared_cookie = test::TestRequest::post()
        .uri("/api/auth/refresh-token")
        .cookie(Cookie::new("refreshToken", ""))
        .set_json(json!({ "refreshToken": refresh }))
        .to_request();
    assert_eq!(
        test::call_service(&app, cleared_cookie).await.status(),
        StatusCode::OK
    );

    // An access token is not accepted where a refresh token is expected
    let wrong_kind = test::TestRequest::post()
        .uri("/api/auth/refresh-token")
        .set_json(json!({ "refreshToken": access }))
        .to_request();
    let resp = test::call_service(&app, wrong_kind).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "TOKEN_INVALID");

    let missing = test::TestRequest::post()
        .uri("/api/auth/refresh-token")
        .to_request();
    let resp = test::call_service(&app, missing).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "UNAUTHORIZED");
}

#[actix_web::test]
async fn test_transactions_start_empty() {
    let ctx = TestContext::new();
    let (_, token) = ctx.member("Asha Rai", "asha@example.com", "9800000001").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/user/transactions")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn test_list_users_requires_admin_key() {
    let ctx = TestContext::new();
    ctx.member("Asha Rai", "asha@example.com", "9800000001").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/api/user/all").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::get()
        .uri("/api/user/all")
        .insert_header(common::admin_key())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let users: Value = test::read_body_json(resp).await;
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert!(users[0].get("passwordHash").is_none());
}
