//! Protected resource served behind the bearer gate.
//!
//! ```text
//! GET /api/v1/resource  Authorization: Bearer <token>
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};

use crate::inbound::http::schemas::ErrorSchema;
use crate::middleware::AuthenticatedSubject;

/// Payload returned to an authenticated caller.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceResponse {
    /// Email the bearer token was verified for.
    #[schema(example = "ada@example.com")]
    pub email: String,
}

/// Return the protected payload for the authenticated caller.
///
/// Only reachable through a scope wrapped with
/// [`crate::middleware::RequireBearer`]; without it the subject extractor
/// fails with `500`.
#[utoipa::path(
    get,
    path = "/api/v1/resource",
    responses(
        (status = 200, description = "Protected payload", body = ResourceResponse),
        (
            status = 401,
            description = "Missing, malformed, or rejected bearer token",
            body = ErrorSchema
        )
    ),
    tags = ["resource"],
    operation_id = "getResource",
    security(("BearerToken" = []))
)]
#[get("/resource")]
pub async fn get_resource(
    subject: web::ReqData<AuthenticatedSubject>,
) -> web::Json<ResourceResponse> {
    web::Json(ResourceResponse {
        email: subject.email().to_owned(),
    })
}
