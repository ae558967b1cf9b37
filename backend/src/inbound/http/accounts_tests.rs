//! Tests for the account handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{AccountRepositoryError, MockAccountService};
use crate::domain::{AccountId, TokenCodec};
use crate::inbound::http::error::json_config;

async fn call(
    accounts: MockAccountService,
    uri: &str,
    body: Value,
) -> actix_web::dev::ServiceResponse {
    let state = HttpState::new(Arc::new(accounts), Arc::new(TokenCodec::default()));
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(json_config())
            .service(
                web::scope("/api/v1")
                    .service(login)
                    .service(register)
                    .service(forget_password),
            ),
    )
    .await;
    let request = actix_test::TestRequest::post()
        .uri(uri)
        .set_json(body)
        .to_request();
    actix_test::call_service(&app, request).await
}

fn is_fake_credential(credential: &Credential) -> bool {
    credential.email() == "fakeEmail" && credential.password() == "fakePassword"
}

#[actix_web::test]
async fn login_accepts_known_credentials() {
    let mut accounts = MockAccountService::new();
    accounts
        .expect_check_user()
        .withf(is_fake_credential)
        .times(1)
        .return_once(|_| Ok(()));

    let response = call(
        accounts,
        "/api/v1/login",
        json!({"email": "fakeEmail", "password": "fakePassword"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[rstest]
#[case(json!({"unknownKey": "x", "password": "y"}), "email")]
#[case(json!({"email": "fakeEmail"}), "password")]
#[case(json!({"email": "", "password": "y"}), "email")]
#[case(json!({"email": "fakeEmail", "password": ""}), "password")]
#[actix_web::test]
async fn login_rejects_missing_fields_without_calling_the_service(
    #[case] body: Value,
    #[case] field: &str,
) {
    let mut accounts = MockAccountService::new();
    accounts.expect_check_user().never();

    let response = call(accounts, "/api/v1/login", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload: Value = actix_test::read_body_json(response).await;
    assert_eq!(payload["code"], "invalid_request");
    assert_eq!(payload["details"]["field"], field);
}

#[rstest]
#[case(AuthError::authentication_failed("fakeEmail"))]
#[case(AuthError::Backend(AccountRepositoryError::query("fakeError")))]
#[actix_web::test]
async fn login_failures_are_unauthorized(#[case] failure: AuthError) {
    let mut accounts = MockAccountService::new();
    accounts
        .expect_check_user()
        .times(1)
        .return_once(move |_| Err(failure));

    let response = call(
        accounts,
        "/api/v1/login",
        json!({"email": "fakeEmail", "password": "fakePassword"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = actix_test::read_body(response).await;
    let text = std::str::from_utf8(&body).expect("utf8 body");
    assert!(!text.contains("fakePassword"));
    assert!(!text.contains("fakeError"));
}

#[actix_web::test]
async fn register_creates_account() {
    let mut accounts = MockAccountService::new();
    accounts
        .expect_add_user()
        .withf(is_fake_credential)
        .times(1)
        .return_once(|_| Ok(AccountId::random()));

    let response = call(
        accounts,
        "/api/v1/register",
        json!({"email": "fakeEmail", "password": "fakePassword"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[rstest]
#[case(AccountRepositoryError::duplicate("fakeEmail"))]
#[case(AccountRepositoryError::connection("fakeError"))]
#[actix_web::test]
async fn register_failures_are_unauthorized(#[case] failure: AccountRepositoryError) {
    let mut accounts = MockAccountService::new();
    accounts
        .expect_add_user()
        .times(1)
        .return_once(move |_| Err(AuthError::Backend(failure)));

    let response = call(
        accounts,
        "/api/v1/register",
        json!({"email": "fakeEmail", "password": "fakePassword"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn register_rejects_missing_password() {
    let mut accounts = MockAccountService::new();
    accounts.expect_add_user().never();

    let response = call(accounts, "/api/v1/register", json!({"email": "fakeEmail"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn forget_password_returns_stored_credential() {
    let mut accounts = MockAccountService::new();
    accounts
        .expect_get_password()
        .withf(|email| email == "fakeEmail")
        .times(1)
        .return_once(|_| Ok("fakePassword".to_owned()));

    let response = call(accounts, "/api/v1/forget-password", json!({"email": "fakeEmail"})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: RecoveredPassword = actix_test::read_body_json(response).await;
    assert_eq!(
        body,
        RecoveredPassword {
            email: "fakeEmail".into(),
            password: "fakePassword".into(),
        }
    );
}

#[rstest]
#[case(AuthError::user_not_found("fakeEmail"))]
#[case(AuthError::Backend(AccountRepositoryError::connection("fakeError")))]
#[actix_web::test]
async fn forget_password_failures_are_not_found(#[case] failure: AuthError) {
    let mut accounts = MockAccountService::new();
    accounts
        .expect_get_password()
        .times(1)
        .return_once(move |_| Err(failure));

    let response = call(accounts, "/api/v1/forget-password", json!({"email": "fakeEmail"})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload: Value = actix_test::read_body_json(response).await;
    assert_eq!(payload["code"], "not_found");
}

#[rstest]
#[case(json!({}))]
#[case(json!({"email": ""}))]
#[case(json!({"unknownKey": "fakeEmail"}))]
#[actix_web::test]
async fn forget_password_requires_email(#[case] body: Value) {
    let mut accounts = MockAccountService::new();
    accounts.expect_get_password().never();

    let response = call(accounts, "/api/v1/forget-password", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn non_string_fields_are_bad_requests() {
    let mut accounts = MockAccountService::new();
    accounts.expect_check_user().never();

    let response = call(
        accounts,
        "/api/v1/login",
        json!({"email": 42, "password": "fakePassword"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
