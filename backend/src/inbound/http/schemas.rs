//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay free of `utoipa`; the wrappers here mirror their wire
//! shape and are registered with [`crate::doc::ApiDoc`].

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// A required field is missing or the body is unreadable.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Credentials are missing, malformed, or rejected.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// No account exists for the lookup.
    #[schema(rename = "not_found")]
    NotFound,
    /// The account store is not answering.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "unauthorized")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "invalid credentials")]
    message: String,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details, such as the offending field.
    details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_code_schema_lists_wire_codes() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        assert_eq!(ErrorCodeSchema::name(), "crate.domain.ErrorCode");
        for code in [
            "invalid_request",
            "unauthorized",
            "not_found",
            "service_unavailable",
        ] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[test]
    fn error_schema_uses_camel_case_trace_id() {
        let schema_json = schema_to_json::<ErrorSchema>();
        assert_eq!(ErrorSchema::name(), "crate.domain.Error");
        assert!(schema_json.contains("traceId"));
        assert!(!schema_json.contains("trace_id"));
    }
}
