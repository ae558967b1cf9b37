//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the account routes, the bearer-gated resource route,
//! the health probes, and the error schema wrappers. Route annotations use
//! [`DEFAULT_API_PREFIX`]; [`openapi_for_prefix`] moves them onto the
//! configured prefix before Swagger UI serves the document in debug builds.

use crate::inbound::http::DEFAULT_API_PREFIX;
use crate::inbound::http::accounts::{CredentialRequest, ForgetPasswordRequest, RecoveredPassword};
use crate::inbound::http::resource::ResourceResponse;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Name of the bearer security scheme referenced by gated operations.
pub const BEARER_SCHEME: &str = "BearerToken";

/// Register the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            BEARER_SCHEME,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some(
                        "Base64 of the email and password joined by the service delimiter.",
                    ))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "auth-gate API",
        description = "Account operations and a bearer-token gated resource."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::accounts::login,
        crate::inbound::http::accounts::register,
        crate::inbound::http::accounts::forget_password,
        crate::inbound::http::resource::get_resource,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CredentialRequest,
        ForgetPasswordRequest,
        RecoveredPassword,
        ResourceResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "accounts", description = "Login, registration, and password recovery"),
        (name = "resource", description = "Bearer-gated resource"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

/// Rewrite paths documented under [`DEFAULT_API_PREFIX`] onto `prefix`.
struct ApiPrefixAddon<'a> {
    prefix: &'a str,
}

impl Modify for ApiPrefixAddon<'_> {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let paths = std::mem::take(&mut openapi.paths.paths);
        openapi.paths.paths = paths
            .into_iter()
            .map(|(path, item)| {
                let rewritten = match path.strip_prefix(DEFAULT_API_PREFIX) {
                    Some(rest) => format!("{}{rest}", self.prefix),
                    None => path,
                };
                (rewritten, item)
            })
            .collect();
    }
}

/// OpenAPI document with account and resource paths under `api_prefix`.
///
/// Health probes keep their fixed paths.
///
/// # Examples
/// ```
/// use auth_gate::doc::openapi_for_prefix;
///
/// let doc = openapi_for_prefix("/auth");
/// assert!(doc.paths.paths.contains_key("/auth/login"));
/// assert!(doc.paths.paths.contains_key("/health/ready"));
/// ```
pub fn openapi_for_prefix(api_prefix: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    ApiPrefixAddon { prefix: api_prefix }.modify(&mut doc);
    doc
}
