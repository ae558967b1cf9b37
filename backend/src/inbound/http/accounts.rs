//! Account API handlers.
//!
//! ```text
//! POST /api/v1/login {"email":"ada@example.com","password":"secret"}
//! POST /api/v1/register {"email":"ada@example.com","password":"secret"}
//! POST /api/v1/forget-password {"email":"ada@example.com"}
//! ```
//!
//! Every failure is logged with the operation and email before the response
//! is written; passwords are never logged.

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use crate::domain::{AuthError, Credential, CredentialValidationError, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /login` and `POST /register`.
///
/// Both fields are optional at the JSON level so that a missing field is
/// answered with `400 Bad Request` and the shared error payload.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRequest {
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[schema(example = "correct horse battery staple")]
    pub password: Option<String>,
}

impl TryFrom<CredentialRequest> for Credential {
    type Error = CredentialValidationError;

    fn try_from(value: CredentialRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(
            value.email.as_deref().unwrap_or_default(),
            value.password.as_deref().unwrap_or_default(),
        )
    }
}

/// Request body for `POST /forget-password`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForgetPasswordRequest {
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
}

/// Response body for `POST /forget-password`.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecoveredPassword {
    pub email: String,
    pub password: String,
}

fn map_validation_error(err: CredentialValidationError) -> Error {
    let field = err.field();
    Error::invalid_request(format!("{field} must not be empty"))
        .with_details(json!({ "field": field, "code": "missing_field" }))
}

fn log_failure(operation: &'static str, email: &str, err: &AuthError) {
    warn!(operation, email = %email, reason = err.kind(), error = %err, "account operation failed");
}

/// Verify a credential pair.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = CredentialRequest,
    responses(
        (status = 200, description = "Credentials accepted"),
        (status = 400, description = "Missing email or password", body = ErrorSchema),
        (status = 401, description = "Invalid credentials", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<CredentialRequest>,
) -> ApiResult<HttpResponse> {
    let credential = Credential::try_from(payload.into_inner()).map_err(map_validation_error)?;
    if let Err(err) = state.accounts.check_user(&credential).await {
        log_failure("login", credential.email(), &err);
        return Err(Error::unauthorized("invalid credentials"));
    }
    Ok(HttpResponse::Ok().finish())
}

/// Create an account for a credential pair.
#[utoipa::path(
    post,
    path = "/api/v1/register",
    request_body = CredentialRequest,
    responses(
        (status = 201, description = "Account created"),
        (status = 400, description = "Missing email or password", body = ErrorSchema),
        (status = 401, description = "Account could not be created", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "register",
    security([])
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<CredentialRequest>,
) -> ApiResult<HttpResponse> {
    let credential = Credential::try_from(payload.into_inner()).map_err(map_validation_error)?;
    if let Err(err) = state.accounts.add_user(&credential).await {
        log_failure("register", credential.email(), &err);
        return Err(Error::unauthorized("unable to register account"));
    }
    Ok(HttpResponse::Created().finish())
}

/// Return the stored password for an email.
#[utoipa::path(
    post,
    path = "/api/v1/forget-password",
    request_body = ForgetPasswordRequest,
    responses(
        (status = 200, description = "Stored credential", body = RecoveredPassword),
        (status = 400, description = "Missing email", body = ErrorSchema),
        (status = 404, description = "No account for this email", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "forgetPassword",
    security([])
)]
#[post("/forget-password")]
pub async fn forget_password(
    state: web::Data<HttpState>,
    payload: web::Json<ForgetPasswordRequest>,
) -> ApiResult<web::Json<RecoveredPassword>> {
    let email = payload
        .into_inner()
        .email
        .filter(|email| !email.is_empty())
        .ok_or_else(|| map_validation_error(CredentialValidationError::EmptyEmail))?;

    match state.accounts.get_password(&email).await {
        Ok(password) => Ok(web::Json(RecoveredPassword { email, password })),
        Err(err) => {
            log_failure("forget_password", &email, &err);
            Err(Error::not_found("no account registered for this email"))
        }
    }
}

#[cfg(test)]
#[path = "accounts_tests.rs"]
mod tests;
