//! Integration tests for login, refresh and revoke

mod common;

use actix_web::{http::header, test};
use serde_json::{json, Value};

use chirpy_api::create_app;
use chirpy_core::services::token::verify_access_token;
use chirpy_shared::config::Platform;

use common::{context, JWT_SECRET};

macro_rules! app_with_user {
    ($ctx:ident, $app:ident) => {
        let $ctx = context(Platform::Dev);
        let $app = test::init_service(create_app($ctx.state.clone(), $ctx.chirps.clone())).await;
        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({"email": "walt@breakingbad.com", "password": "04234"}))
            .to_request();
        assert_eq!(test::call_service(&$app, req).await.status(), 201);
    };
}

fn login_request(password: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"email": "walt@breakingbad.com", "password": password}))
}

#[actix_web::test]
async fn test_login_returns_token_pair() {
    app_with_user!(ctx, app);

    let resp = test::call_service(&app, login_request("04234").to_request()).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    let user_id = body["id"].as_str().unwrap();
    let access = body["token"].as_str().unwrap();
    let refresh = body["refreshToken"].as_str().unwrap();

    assert_eq!(body["email"], "walt@breakingbad.com");
    assert_eq!(
        verify_access_token(access, JWT_SECRET).unwrap().to_string(),
        user_id
    );
    assert_eq!(refresh.len(), 64);
}

#[actix_web::test]
async fn test_login_wrong_password() {
    app_with_user!(ctx, app);

    let resp = test::call_service(&app, login_request("wrong").to_request()).await;

    assert_eq!(resp.status(), 401);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "incorrect email or password");
}

#[actix_web::test]
async fn test_refresh_then_revoke() {
    app_with_user!(ctx, app);
    let login: Value = test::call_and_read_body_json(&app, login_request("04234").to_request()).await;
    let bearer = format!("Bearer {}", login["refreshToken"].as_str().unwrap());

    let req = test::TestRequest::post()
        .uri("/api/refresh")
        .insert_header((header::AUTHORIZATION, bearer.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().unwrap();
    assert_eq!(
        verify_access_token(token, JWT_SECRET).unwrap().to_string(),
        login["id"].as_str().unwrap()
    );

    let req = test::TestRequest::post()
        .uri("/api/revoke")
        .insert_header((header::AUTHORIZATION, bearer.clone()))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 204);

    let req = test::TestRequest::post()
        .uri("/api/refresh")
        .insert_header((header::AUTHORIZATION, bearer))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "no token found");
}

#[actix_web::test]
async fn test_refresh_without_header() {
    let ctx = context(Platform::Dev);
    let app = test::init_service(create_app(ctx.state.clone(), ctx.chirps.clone())).await;

    let req = test::TestRequest::post().uri("/api/refresh").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "malformed authorization header");
}

#[actix_web::test]
async fn test_revoke_unknown_token() {
    let ctx = context(Platform::Dev);
    let app = test::init_service(create_app(ctx.state.clone(), ctx.chirps.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/revoke")
        .insert_header((header::AUTHORIZATION, "Bearer deadbeef"))
        .to_request();

    assert_eq!(test::call_service(&app, req).await.status(), 204);
}
